//! Error types for the Isolation engine
//!
//! Board construction and move application report `IsolationError`.
//! The search uses `SearchTimeout` as an internal signal that the
//! iterative deepening driver always catches.

use thiserror::Error;

use crate::board::{Pos, MAX_CELLS};

/// Errors raised by the board model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsolationError {
    /// Move is not among the active player's legal moves
    #[error("illegal move to {to}")]
    IllegalMove { to: Pos },

    /// Board must have at least one row and one column
    #[error("board dimensions must be non-zero (got {width}x{height})")]
    EmptyBoard { width: u8, height: u8 },

    /// Board does not fit the bitboard
    #[error("board {width}x{height} exceeds {MAX_CELLS} cells")]
    BoardTooLarge { width: u8, height: u8 },

    /// Start position outside the grid
    #[error("position {pos} is outside the {width}x{height} board")]
    OutOfBounds { pos: Pos, width: u8, height: u8 },

    /// Both players given the same start cell
    #[error("both players cannot start on {pos}")]
    SharedStart { pos: Pos },
}

/// Deadline reached while a search iteration was in progress
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("search deadline reached")]
pub struct SearchTimeout;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid board: {0}")]
    Board(#[from] IsolationError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for board operations
pub type IsolationResult<T> = Result<T, IsolationError>;
