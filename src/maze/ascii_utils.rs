/*!
 * # Module de visualisation du labyrinthe
 *
 * Ce module convertit un `Maze` en une représentation ASCII. Il n'utilise que
 * l'API de consultation du labyrinthe (`width`, `height`, `at`,
 * `wall_between`).
 *
 * Les fonctions disponibles permettent :
 * - D'afficher le labyrinthe, murs compris.
 * - D'afficher le labyrinthe avec un chemin marqué.
 * - De formater une liste de cellules.
 */

use crate::maze::cell::Cell;
use crate::maze::map::Maze;

const CORNER: char = '+';
const H_WALL: &str = "---";
const V_WALL: char = '|';
const OPEN: &str = "   ";
const MARK: &str = " • ";

/// Génère une représentation ASCII du labyrinthe.
///
/// Le bord extérieur est toujours dessiné comme un mur.
///
/// # Exemple
///
/// Un labyrinthe 2x1 sans murs intérieurs :
///
/// ```text
/// +---+---+
/// |       |
/// +---+---+
/// ```
pub fn render_maze(maze: &Maze) -> String {
    render_maze_with_path(maze, &[])
}

/// Génère une représentation ASCII du labyrinthe où les cellules de `path`
/// sont marquées d'un `•`. Les positions hors bornes sont ignorées.
pub fn render_maze_with_path(maze: &Maze, path: &[(i32, i32)]) -> String {
    let (width, height) = (maze.width() as i32, maze.height() as i32);
    let mut out = String::new();

    for row in 0..height {
        // Murs au Nord de la ligne
        for column in 0..width {
            out.push(CORNER);
            let walled = row == 0 || maze.wall_between((row - 1, column), (row, column));
            out.push_str(if walled { H_WALL } else { OPEN });
        }
        out.push(CORNER);
        out.push('\n');

        // Cellules et murs verticaux
        out.push(V_WALL);
        for column in 0..width {
            let marked = path.contains(&(row, column)) && maze.at(row, column).is_ok();
            out.push_str(if marked { MARK } else { OPEN });
            let walled = column == width - 1 || maze.wall_between((row, column), (row, column + 1));
            out.push(if walled { V_WALL } else { ' ' });
        }
        out.push('\n');
    }

    for _ in 0..width {
        out.push(CORNER);
        out.push_str(H_WALL);
    }
    out.push(CORNER);
    out.push('\n');
    out
}

/// Formate une liste de cellules, par ex. `[ (0, 1) (1, 0) ]`.
pub fn format_cells(cells: &[&Cell]) -> String {
    let mut s = String::from("[ ");
    for cell in cells {
        s.push_str(&format!("{} ", cell));
    }
    s.push(']');
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_walled_maze() {
        let maze = Maze::new(2, 1).unwrap();
        assert_eq!(render_maze(&maze), "+---+---+\n|   |   |\n+---+---+\n");
    }

    #[test]
    fn test_render_open_maze() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.clear_walls();
        maze.add_wall((0, 0), (1, 0)).unwrap();
        let expected = "\
+---+---+
|       |
+---+   +
|       |
+---+---+
";
        assert_eq!(render_maze(&maze), expected);
    }

    #[test]
    fn test_render_path_marks() {
        let mut maze = Maze::new(2, 1).unwrap();
        maze.clear_walls();
        let ascii = render_maze_with_path(&maze, &[(0, 1), (5, 5)]);
        assert_eq!(ascii, "+---+---+\n|     • |\n+---+---+\n");
    }

    #[test]
    fn test_format_cells() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.clear_walls();
        let neighbors = maze.neighbors(0, 0).unwrap();
        assert_eq!(format_cells(&neighbors), "[ (0, 1) (1, 0) ]");
        assert_eq!(format_cells(&[]), "[ ]");
    }
}
