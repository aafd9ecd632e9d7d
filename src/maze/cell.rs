use std::fmt;

use crate::maze::direction::Direction;
use crate::maze::edges::Edges;

/// Représente une cellule du labyrinthe, c'est-à-dire un sommet du graphe.
///
/// Les coordonnées sont fixées à la création par le `Maze` propriétaire.
/// Les liens vers les voisines ne sont modifiés que par le `Maze`, qui garantit
/// leur symétrie.
#[derive(Debug, Clone)]
pub struct Cell {
    row: usize,
    column: usize,
    pub(crate) edges: Edges,
    /// Données de parcours (recherche de chemin), remises à zéro par `Maze::clear`.
    pub visited: bool,
    pub distance: u32,
    pub predecessor: Option<usize>,
}

impl Cell {
    /// Crée une cellule sans aucun lien (4 murs).
    pub(crate) fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            edges: Edges::default(),
            visited: false,
            distance: 0,
            predecessor: None,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Coordonnées sous la forme utilisée par l'API du `Maze`.
    pub fn position(&self) -> (i32, i32) {
        // Le Maze borne ses dimensions à i32::MAX
        (self.row as i32, self.column as i32)
    }

    /// Ligne en flottant, autorise les demi-pas du lissage diagonal.
    pub fn diagonal_row(&self) -> f64 {
        self.row as f64
    }

    /// Colonne en flottant, autorise les demi-pas du lissage diagonal.
    pub fn diagonal_column(&self) -> f64 {
        self.column as f64
    }

    pub fn edges(&self) -> &Edges {
        &self.edges
    }

    /// Voisine atteignable dans `direction`, si le passage est ouvert.
    pub fn neighbor(&self, direction: Direction) -> Option<usize> {
        self.edges.get(direction)
    }

    /// Index des voisines reliées par un passage ouvert (sens graphe),
    /// dans l'ordre Nord, Est, Sud, Ouest.
    pub fn neighbor_list(&self) -> Vec<usize> {
        self.edges.links().map(|(_, index)| index).collect()
    }

    /// Remet à zéro les liens et les données de parcours.
    pub(crate) fn clear_data(&mut self) {
        self.edges.clear();
        self.visited = false;
        self.distance = 0;
        self.predecessor = None;
    }
}

impl PartialEq for Cell {
    /// Deux cellules sont égales si elles ont les mêmes coordonnées.
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.column == other.column
    }
}

impl Eq for Cell {}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
