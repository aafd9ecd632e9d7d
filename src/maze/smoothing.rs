//! Lissage de chemin pour un robot capable de se déplacer en diagonale.
//!
//! Entre deux cellules consécutives du chemin on insère leur milieu. Un virage
//! à 90° `(0,0) -> (1,0) -> (1,1)` devient `(0,0) -> (0.5,0) -> (1,0.5) -> (1,1)`,
//! dont le segment central est une diagonale à 45°. Ce n'est pas un
//! planificateur, juste un post-traitement.

use serde_json::{json, Value};

use crate::maze::cell::Cell;

/// Tout ce qui porte des coordonnées flottantes (ligne, colonne).
pub trait Diagonal {
    fn diagonal_row(&self) -> f64;
    fn diagonal_column(&self) -> f64;
}

impl Diagonal for Cell {
    fn diagonal_row(&self) -> f64 {
        Cell::diagonal_row(self)
    }

    fn diagonal_column(&self) -> f64 {
        Cell::diagonal_column(self)
    }
}

impl<T: Diagonal + ?Sized> Diagonal for &T {
    fn diagonal_row(&self) -> f64 {
        (**self).diagonal_row()
    }

    fn diagonal_column(&self) -> f64 {
        (**self).diagonal_column()
    }
}

/// Point d'un chemin lissé, éventuellement sur une demi-case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub row: f64,
    pub column: f64,
}

impl Waypoint {
    pub fn new(row: f64, column: f64) -> Self {
        Self { row, column }
    }

    fn of<P: Diagonal>(point: &P) -> Self {
        Self::new(point.diagonal_row(), point.diagonal_column())
    }

    /// Milieu du segment `[self, other]`.
    pub fn midpoint(&self, other: &Waypoint) -> Waypoint {
        Waypoint::new(
            (self.row + other.row) / 2.0,
            (self.column + other.column) / 2.0,
        )
    }
}

impl Diagonal for Waypoint {
    fn diagonal_row(&self) -> f64 {
        self.row
    }

    fn diagonal_column(&self) -> f64 {
        self.column
    }
}

impl From<(f64, f64)> for Waypoint {
    fn from((row, column): (f64, f64)) -> Self {
        Waypoint::new(row, column)
    }
}

/// Chemin lissé, en lecture seule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmoothedPath {
    points: Vec<Waypoint>,
}

impl SmoothedPath {
    pub fn points(&self) -> &[Waypoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Waypoint> {
        self.points.iter()
    }

    /// `[{"row": .., "column": ..}, ...]`
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.points
                .iter()
                .map(|p| json!({ "row": p.row, "column": p.column }))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a SmoothedPath {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Insère le milieu de chaque paire consécutive du chemin.
///
/// Un chemin de `n > 0` points donne `2n - 1` points ; un chemin vide reste vide.
pub fn smooth<P: Diagonal>(path: &[P]) -> SmoothedPath {
    let mut points = Vec::with_capacity((2 * path.len()).saturating_sub(1));
    let mut previous: Option<Waypoint> = None;

    for point in path {
        let current = Waypoint::of(point);
        if let Some(prev) = previous {
            points.push(prev.midpoint(&current));
        }
        points.push(current);
        previous = Some(current);
    }

    SmoothedPath { points }
}
