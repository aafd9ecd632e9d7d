//! Labyrinthe de micromouse vu comme un graphe.
//!
//! Chaque case de la grille est un sommet, chaque passage ouvert entre deux
//! cases voisines est une arête. La crate fournit :
//! - la grille et ses opérations sur les arêtes et les murs (`Maze`) ;
//! - un format binaire compact pour sauvegarder les murs (`codec`) ;
//! - le lissage d'un chemin pour un robot qui roule aussi en diagonale
//!   (`smoothing`).

pub mod maze;

pub use maze::ascii_utils::{format_cells, render_maze, render_maze_with_path};
pub use maze::cell::Cell;
pub use maze::codec;
pub use maze::direction::Direction;
pub use maze::edges::Edges;
pub use maze::error::{MazeError, Result};
pub use maze::generator::random_maze;
pub use maze::map::{Iter, Maze};
pub use maze::smoothing::{smooth, Diagonal, SmoothedPath, Waypoint};

// -----------------------------------------------------------------------------
// TEST
// -----------------------------------------------------------------------------
#[test]
fn test_single_wall_survives_round_trip() {
    let mut maze = Maze::new(3, 3).unwrap();
    maze.clear_walls();
    maze.add_wall((0, 0), (0, 1)).unwrap();
    assert!(maze.wall_between((0, 0), (0, 1)));
    assert!(!maze.wall_between((0, 0), (1, 0)));

    let mut bytes = Vec::new();
    codec::encode(&maze, &mut bytes).unwrap();

    let mut restored = Maze::new(3, 3).unwrap();
    codec::decode_into(&mut bytes.as_slice(), &mut restored).unwrap();

    for cell in &restored {
        let (row, column) = cell.position();
        for other in restored.adjacent_cells(row, column).unwrap() {
            let expected = (cell.position(), other.position()) == ((0, 0), (0, 1))
                || (cell.position(), other.position()) == ((0, 1), (0, 0));
            assert_eq!(restored.wall_between(cell.position(), other.position()), expected);
        }
    }
}
