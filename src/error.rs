//! Error types for maze loading and target discovery.

use thiserror::Error;

/// Failures that happen before a search can start. A missing path is not an error; searches
/// report it as [None].
#[derive(Error, Debug)]
pub enum MazeError {
    #[error("no cell holds the target sentinel {sentinel}")]
    TargetNotFound { sentinel: i32 },

    #[error("maze has no cells")]
    EmptyMaze,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell {token:?} in row {row}")]
    InvalidCell { row: usize, token: String },

    #[error("start ({row}, {col}) is outside the maze")]
    StartOutOfBounds { row: i32, col: i32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for MazeError {
    fn from(e: toml::de::Error) -> Self {
        MazeError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MazeError>;
