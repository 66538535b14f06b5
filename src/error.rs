//! Error types.
//!
//! The search itself never fails; errors only arise at the edges:
//! loading configuration, parsing caller input, and applying moves
//! to a [`GameState`](crate::game::GameState).

use std::path::PathBuf;

use thiserror::Error;

use crate::board::{Pos, BOARD_SIZE};

/// Errors from loading or validating an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("threat weight `{higher}` must exceed the sum of every lower-priority weight")]
    WeightOrdering { higher: &'static str },
}

/// Errors from applying a move to a game in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("the game is already over")]
    GameOver,
}

/// Errors from parsing the text board format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("expected {} rows, found {}", BOARD_SIZE, .0)]
    RowCount(usize),

    #[error("row {row} has {len} cells, expected {}", BOARD_SIZE)]
    RowLength { row: usize, len: usize },

    #[error("unexpected character {ch:?} at ({row}, {col})")]
    BadCell { row: usize, col: usize, ch: char },
}

/// Error from parsing a difficulty or side name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct ParseNameError {
    pub kind: &'static str,
    pub value: String,
}
