use rand::Rng;

use crate::maze::error::{MazeError, Result};
use crate::maze::map::Maze;

/// Génère un labyrinthe aléatoire : tous les passages sont ouverts, puis
/// chaque passage intérieur (Sud et Est de chaque cellule) est muré avec la
/// probabilité `wall_density`.
pub fn random_maze<R: Rng>(
    width: usize,
    height: usize,
    wall_density: f64,
    rng: &mut R,
) -> Result<Maze> {
    if !(0.0..=1.0).contains(&wall_density) {
        return Err(MazeError::InvalidDensity(wall_density));
    }

    let mut maze = Maze::new(width, height)?;
    maze.clear_walls();

    for row in 0..height as i32 {
        for column in 0..width as i32 {
            if row + 1 < height as i32 && rng.random_bool(wall_density) {
                maze.add_wall((row, column), (row + 1, column))?;
            }
            if column + 1 < width as i32 && rng.random_bool(wall_density) {
                maze.add_wall((row, column), (row, column + 1))?;
            }
        }
    }
    Ok(maze)
}
