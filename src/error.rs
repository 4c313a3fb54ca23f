//! Error types for the Gomoku engine

use thiserror::Error;

use crate::board::Stone;

/// Errors raised by the game engine and its configuration layer
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GomokuError {
    #[error("invalid move: ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("invalid move: ({row}, {col}) is already occupied")]
    Occupied { row: i32, col: i32 },

    #[error("game already over: {winner} won")]
    GameOver { winner: Stone },

    #[error("no candidate moves: the board is full")]
    NoCandidateMoves,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for engine operations
pub type GomokuResult<T> = Result<T, GomokuError>;
