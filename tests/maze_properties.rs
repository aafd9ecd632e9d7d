//! Propriétés du labyrinthe et du format binaire, vérifiées sur des
//! labyrinthes aléatoires (graines fixes).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rusty_micromouse::{codec, random_maze, smooth, Maze, MazeError, Waypoint};

/// Toutes les paires de cellules adjacentes, chacune une fois.
fn adjacent_pairs(maze: &Maze) -> Vec<((i32, i32), (i32, i32))> {
    let mut pairs = Vec::new();
    for cell in maze {
        let (row, column) = cell.position();
        for other in [(row + 1, column), (row, column + 1)] {
            if !maze.out_of_bounds(other.0, other.1) {
                pairs.push(((row, column), other));
            }
        }
    }
    pairs
}

fn assert_edge_equivalent(a: &Maze, b: &Maze) {
    assert_eq!((a.width(), a.height()), (b.width(), b.height()));
    for (x, y) in adjacent_pairs(a) {
        assert_eq!(a.wall_between(x, y), b.wall_between(x, y), "{x:?} <-> {y:?}");
    }
}

#[test]
fn test_round_trip_random_mazes() {
    let mut rng = StdRng::seed_from_u64(2019);
    for _ in 0..50 {
        let width = rng.random_range(1..12);
        let height = rng.random_range(1..12);
        let density = rng.random_range(0.0..=1.0);
        let maze = random_maze(width, height, density, &mut rng).unwrap();

        let mut bytes = Vec::new();
        codec::encode(&maze, &mut bytes).unwrap();
        assert_eq!(
            bytes.len(),
            codec::HEADER_LEN + (width * height).div_ceil(codec::CODEWORDS_PER_BYTE)
        );

        let mut restored = Maze::new(width, height).unwrap();
        codec::decode_into(&mut bytes.as_slice(), &mut restored).unwrap();
        assert_edge_equivalent(&maze, &restored);

        let rebuilt = codec::from_bytes(&bytes).unwrap();
        assert_edge_equivalent(&maze, &rebuilt);
    }
}

#[test]
fn test_symmetry_after_random_edits() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut maze = Maze::new(7, 5).unwrap();

    for _ in 0..500 {
        let a = (rng.random_range(-1..6), rng.random_range(-1..8));
        let b = (rng.random_range(-1..6), rng.random_range(-1..8));
        let result = if rng.random_bool(0.5) {
            maze.add_edge(a, b)
        } else {
            maze.remove_edge(a, b)
        };
        if maze.out_of_bounds(a.0, a.1) || maze.out_of_bounds(b.0, b.1) {
            assert!(matches!(result, Err(MazeError::OutOfBounds { .. })));
        } else {
            result.unwrap();
        }

        for cell in &maze {
            for index in cell.neighbor_list() {
                let other = maze.cell(index).unwrap();
                assert_ne!(other, cell);
                let (dr, dc) = (
                    other.row() as i32 - cell.row() as i32,
                    other.column() as i32 - cell.column() as i32,
                );
                assert_eq!(dr.abs() + dc.abs(), 1);
                let back = maze.iter().position(|c| c == cell).unwrap();
                assert!(other.neighbor_list().contains(&back));
            }
        }
    }
}

#[test]
fn test_wall_toggles_restore_state() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut maze = random_maze(6, 6, 0.5, &mut rng).unwrap();

    for (a, b) in adjacent_pairs(&maze) {
        let before = maze.wall_between(a, b);
        assert_eq!(before, maze.wall_between(b, a));

        maze.add_wall(a, b).unwrap();
        assert!(maze.wall_between(a, b));
        maze.remove_wall(a, b).unwrap();
        assert!(!maze.wall_between(a, b));

        if before {
            maze.add_wall(a, b).unwrap();
        }
        assert_eq!(maze.wall_between(a, b), before);
    }
}

#[test]
fn test_out_of_bounds_matches_definition() {
    let maze = Maze::new(9, 4).unwrap();
    let samples = [i32::MIN, -1000, -1, 0, 1, 3, 4, 8, 9, 10, 1000, i32::MAX];
    for row in samples {
        for column in samples {
            let expected = row < 0 || row >= 4 || column < 0 || column >= 9;
            assert_eq!(maze.out_of_bounds(row, column), expected, "({row}, {column})");
            assert_eq!(maze.at(row, column).is_err(), expected);
        }
    }
}

#[test]
fn test_corrupted_streams() {
    let mut rng = StdRng::seed_from_u64(99);
    let source = random_maze(5, 4, 0.3, &mut rng).unwrap();
    let bytes = codec::to_bytes(&source);

    // En-tête trop court : aucune modification
    let mut maze = random_maze(5, 4, 0.3, &mut StdRng::seed_from_u64(1)).unwrap();
    let snapshot = maze.clone();
    for len in 0..codec::HEADER_LEN {
        let err = codec::decode_into(&mut &bytes[..len], &mut maze).unwrap_err();
        assert!(matches!(err, MazeError::CorruptedData(_)));
        assert_edge_equivalent(&maze, &snapshot);
    }

    // Mauvaises dimensions : aucune modification
    let mut other = Maze::new(4, 5).unwrap();
    let err = codec::decode_into(&mut bytes.as_slice(), &mut other).unwrap_err();
    assert!(matches!(err, MazeError::DimensionMismatch { .. }));
    assert!(other.iter().all(|cell| cell.neighbor_list().is_empty()));

    // Octets en trop : retour à l'état sans passage
    let mut padded = bytes.clone();
    padded.extend_from_slice(&[0, 0]);
    let err = codec::decode_into(&mut padded.as_slice(), &mut maze).unwrap_err();
    assert!(matches!(err, MazeError::CorruptedData(_)));
    assert!(maze.iter().all(|cell| cell.neighbor_list().is_empty()));
    assert!(codec::from_bytes(&padded).is_err());
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("maze.bin");

    let maze = random_maze(16, 16, 0.35, &mut StdRng::seed_from_u64(3)).unwrap();
    codec::save(&maze, &path).unwrap();
    assert_eq!(
        std::fs::metadata(&path).unwrap().len() as usize,
        codec::HEADER_LEN + 64
    );

    let loaded = codec::load(&path).unwrap();
    assert_edge_equivalent(&maze, &loaded);

    let mut target = Maze::new(16, 16).unwrap();
    codec::load_into(&path, &mut target).unwrap();
    assert_edge_equivalent(&maze, &target);

    let missing = codec::load(dir.path().join("missing.bin"));
    assert!(matches!(missing, Err(MazeError::Io(_))));
}

#[test]
fn test_optimize_path_through_maze() {
    let mut maze = Maze::new(3, 3).unwrap();
    maze.clear_walls();
    let smoothed = maze.optimize(&[(0, 0), (1, 0), (1, 1)]).unwrap();
    let expected: Vec<Waypoint> = [(0.0, 0.0), (0.5, 0.0), (1.0, 0.5), (1.0, 1.0)]
        .into_iter()
        .map(Waypoint::from)
        .collect();
    assert_eq!(smoothed.points(), &expected[..]);

    let single = smooth(&[maze.at(2, 2).unwrap()]);
    assert_eq!(single.points(), &[Waypoint::new(2.0, 2.0)]);
}
