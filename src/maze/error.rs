//! Types d'erreurs du labyrinthe.

use thiserror::Error;

/// Erreur renvoyée par les opérations du labyrinthe et du codec binaire.
#[derive(Error, Debug)]
pub enum MazeError {
    /// Dimensions nulles, ou trop grandes pour l'en-tête 32 bits.
    #[error("invalid maze dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Coordonnée hors de `[0, height) x [0, width)`.
    #[error("cell ({row}, {column}) is out of bounds")]
    OutOfBounds { row: i32, column: i32 },

    /// Flux tronqué, octets en trop ou en-tête incohérent.
    #[error("corrupted maze data: {0}")]
    CorruptedData(String),

    /// L'en-tête ne correspond pas au labyrinthe cible (largeur, hauteur).
    #[error("dimension mismatch: expected {}x{}, found {}x{}", expected.0, expected.1, found.0, found.1)]
    DimensionMismatch { expected: (i32, i32), found: (i32, i32) },

    /// Probabilité de mur hors de `[0, 1]` (génération aléatoire).
    #[error("wall density {0} is not in [0, 1]")]
    InvalidDensity(f64),

    /// Entrée de chemin illisible (attendu `row,column`).
    #[error("invalid path entry: '{0}'")]
    InvalidPath(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
