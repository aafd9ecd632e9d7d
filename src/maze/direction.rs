/// Les quatre directions cardinales d'une cellule.
///
/// Convention écran : les lignes croissent vers le Sud, les colonnes vers l'Est.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Ordre des liens d'une cellule (sens horaire depuis le Nord).
    pub const CLOCKWISE: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Ordre utilisé pour l'adjacence géométrique (Nord, Sud, Est, Ouest).
    pub const AXES: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Fait demi tour (par ex. North -> South)
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Décalage (ligne, colonne) d'un pas dans cette direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// Nouvelle position après un pas dans cette direction.
    pub fn step(self, row: i32, column: i32) -> (i32, i32) {
        let (dr, dc) = self.offset();
        (row + dr, column + dc)
    }

    /// Direction qui mène de `from` à `to`, si les deux positions sont
    /// orthogonalement adjacentes.
    pub fn between(from: (i32, i32), to: (i32, i32)) -> Option<Self> {
        let delta = (
            i64::from(to.0) - i64::from(from.0),
            i64::from(to.1) - i64::from(from.1),
        );
        match delta {
            (-1, 0) => Some(Direction::North),
            (0, 1) => Some(Direction::East),
            (1, 0) => Some(Direction::South),
            (0, -1) => Some(Direction::West),
            _ => None,
        }
    }
}
