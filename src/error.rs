//! Error types for game play, board geometry and configuration

use std::path::PathBuf;

use crate::board::Side;

/// Rejected moves. None of these change the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },

    #[error("the game is already over")]
    GameOver,

    #[error("no empty cell left to play")]
    NoLegalMove,

    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: u8, col: u8, size: usize },

    #[error("it is the {expected}'s turn")]
    WrongTurn { expected: Side },
}

/// Board dimensions the line catalog cannot be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("run length {run_length} must be at least 2")]
    RunTooShort { run_length: usize },

    #[error("board size {size} is smaller than run length {run_length}")]
    BoardTooSmall { size: usize, run_length: usize },

    #[error("board size {size} exceeds the maximum of {max}")]
    BoardTooLarge { size: usize, max: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid board geometry: {0}")]
    Geometry(#[from] GeometryError),

    #[error("config validation error: {0}")]
    Validation(String),
}
