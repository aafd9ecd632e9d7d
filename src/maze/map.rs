use std::mem;

use log::warn;

use crate::maze::cell::Cell;
use crate::maze::direction::Direction;
use crate::maze::error::{MazeError, Result};
use crate::maze::smoothing::{smooth, SmoothedPath};

/// Carte du labyrinthe : graphe dont les sommets sont les cellules d'une
/// grille rectangulaire et les arêtes les passages ouverts.
///
/// Les cellules sont stockées ligne par ligne (row-major) ; la cellule
/// `(row, column)` est à l'index `row * width + column`. Les positions sont
/// des couples `(row, column)` en `i32`, les valeurs négatives sont donc
/// simplement hors bornes.
#[derive(Debug, Clone)]
pub struct Maze {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Maze {
    /// Crée un labyrinthe `width x height` où chaque cellule est fermée sur
    /// ses 4 côtés.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let invalid = || MazeError::InvalidDimensions { width, height };
        let max = i32::MAX as usize;
        if width == 0 || height == 0 || width > max || height > max {
            return Err(invalid());
        }
        // Un Vec ne peut pas dépasser isize::MAX octets
        let len = width
            .checked_mul(height)
            .filter(|&len| {
                len.checked_mul(mem::size_of::<Cell>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or_else(invalid)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid())?;
        for row in 0..height {
            for column in 0..width {
                cells.push(Cell::new(row, column));
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Nombre de cellules (`width * height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Vrai si et seulement si `(row, column)` n'existe pas dans le labyrinthe.
    pub fn out_of_bounds(&self, row: i32, column: i32) -> bool {
        row < 0 || row as usize >= self.height || column < 0 || column as usize >= self.width
    }

    /// Index row-major de `(row, column)`.
    pub fn index_of(&self, row: i32, column: i32) -> Result<usize> {
        if self.out_of_bounds(row, column) {
            return Err(MazeError::OutOfBounds { row, column });
        }
        Ok(row as usize * self.width + column as usize)
    }

    /// Récupère une cellule en lecture seule.
    pub fn at(&self, row: i32, column: i32) -> Result<&Cell> {
        let index = self.index_of(row, column)?;
        Ok(&self.cells[index])
    }

    /// Récupère une cellule en écriture (données de parcours uniquement,
    /// les liens restent gérés par le `Maze`).
    pub fn at_mut(&mut self, row: i32, column: i32) -> Result<&mut Cell> {
        let index = self.index_of(row, column)?;
        Ok(&mut self.cells[index])
    }

    /// Cellule à un index row-major donné, par ex. un lien de `Cell::neighbor_list`.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Parcourt les cellules ligne par ligne.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            maze: self,
            index: 0,
        }
    }

    /// Crée une arête (passage) entre deux cellules adjacentes.
    ///
    /// Si les cellules ne sont pas adjacentes, un avertissement est émis et
    /// rien n'est modifié.
    pub fn add_edge(&mut self, a: (i32, i32), b: (i32, i32)) -> Result<()> {
        self.link(a, b, true)
    }

    /// Supprime l'arête entre deux cellules adjacentes.
    pub fn remove_edge(&mut self, a: (i32, i32), b: (i32, i32)) -> Result<()> {
        self.link(a, b, false)
    }

    /// Un mur est l'absence d'arête : ajouter un mur retire l'arête.
    pub fn add_wall(&mut self, a: (i32, i32), b: (i32, i32)) -> Result<()> {
        self.remove_edge(a, b)
    }

    /// Retirer un mur revient à créer l'arête.
    pub fn remove_wall(&mut self, a: (i32, i32), b: (i32, i32)) -> Result<()> {
        self.add_edge(a, b)
    }

    fn link(&mut self, a: (i32, i32), b: (i32, i32), open: bool) -> Result<()> {
        let index_a = self.index_of(a.0, a.1)?;
        let index_b = self.index_of(b.0, b.1)?;

        let Some(direction) = Direction::between(a, b) else {
            let action = if open { "add" } else { "remove" };
            warn!("attempt to {action} edge between non-adjacent cells {a:?} <-> {b:?}");
            return Ok(());
        };

        self.cells[index_a]
            .edges
            .set(direction, open.then_some(index_b));
        self.cells[index_b]
            .edges
            .set(direction.opposite(), open.then_some(index_a));
        Ok(())
    }

    /// Vrai s'il n'existe pas de passage de `a` vers `b`.
    ///
    /// Une requête mal formée (position hors bornes) renvoie `false`, pour ne
    /// pas être prise pour un mur certain.
    pub fn wall_between(&self, a: (i32, i32), b: (i32, i32)) -> bool {
        match (self.index_of(a.0, a.1), self.index_of(b.0, b.1)) {
            (Ok(index_a), Ok(index_b)) => !self.cells[index_a]
                .edges()
                .links()
                .any(|(_, index)| index == index_b),
            _ => false,
        }
    }

    /// Ouvre tous les passages : chaque cellule est reliée à ses voisines Sud
    /// et Est quand elles existent. Le labyrinthe devient entièrement connexe.
    pub fn clear_walls(&mut self) {
        for index in 0..self.cells.len() {
            let (row, column) = (index / self.width, index % self.width);
            if row + 1 < self.height {
                self.join(index, index + self.width, Direction::South);
            }
            if column + 1 < self.width {
                self.join(index, index + 1, Direction::East);
            }
        }
    }

    fn join(&mut self, from: usize, to: usize, direction: Direction) {
        self.cells[from].edges.set(direction, Some(to));
        self.cells[to].edges.set(direction.opposite(), Some(from));
    }

    /// Supprime tous les liens et remet à zéro les données de parcours.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear_data();
        }
    }

    /// Cellules géométriquement adjacentes (murs ignorés), dans l'ordre
    /// Nord, Sud, Est, Ouest.
    pub fn adjacent_cells(&self, row: i32, column: i32) -> Result<Vec<&Cell>> {
        self.index_of(row, column)?;
        Ok(Direction::AXES
            .into_iter()
            .map(|dir| dir.step(row, column))
            .filter_map(|(r, c)| self.at(r, c).ok())
            .collect())
    }

    /// Cellules atteignables par un passage ouvert (sens graphe), dans l'ordre
    /// Nord, Est, Sud, Ouest.
    pub fn neighbors(&self, row: i32, column: i32) -> Result<Vec<&Cell>> {
        let cell = self.at(row, column)?;
        Ok(cell
            .neighbor_list()
            .into_iter()
            .filter_map(|index| self.cell(index))
            .collect())
    }

    /// Optimise un chemin de positions pour un robot capable de se déplacer
    /// en diagonale.
    pub fn optimize(&self, path: &[(i32, i32)]) -> Result<SmoothedPath> {
        let cells = path
            .iter()
            .map(|&(row, column)| self.at(row, column))
            .collect::<Result<Vec<_>>>()?;
        Ok(smooth(&cells))
    }
}

/// Curseur row-major sur les cellules d'un `Maze`.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    maze: &'a Maze,
    index: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.maze.cells.get(self.index)?;
        self.index += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.maze.cells.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Maze {
    type Item = &'a Cell;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
