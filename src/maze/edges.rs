use crate::maze::direction::Direction;

/// Les 4 liens d'une cellule vers ses voisines.
///
/// Chaque lien est l'index (row-major) de la cellule voisine dans le
/// labyrinthe, ou `None` s'il y a un mur.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Edges {
    pub north: Option<usize>,
    pub east: Option<usize>,
    pub south: Option<usize>,
    pub west: Option<usize>,
}

impl Edges {
    pub fn get(&self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    pub fn set(&mut self, direction: Direction, link: Option<usize>) {
        let slot = match direction {
            Direction::North => &mut self.north,
            Direction::East => &mut self.east,
            Direction::South => &mut self.south,
            Direction::West => &mut self.west,
        };
        *slot = link;
    }

    /// Supprime tous les liens (4 murs).
    pub fn clear(&mut self) {
        *self = Edges::default();
    }

    /// Liens présents, dans l'ordre Nord, Est, Sud, Ouest.
    pub fn links(&self) -> impl Iterator<Item = (Direction, usize)> + '_ {
        Direction::CLOCKWISE
            .into_iter()
            .filter_map(move |dir| self.get(dir).map(|index| (dir, index)))
    }
}
