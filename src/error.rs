//! Crate-wide error type.
//!
//! All operations here are pure computations over in-range data, so the
//! error surface is small: malformed inputs and invalid configurations are
//! rejected up front, before any search work starts.

use thiserror::Error;

/// Errors produced by board construction, move operators, and the runners.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration parameter is out of its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Two boards of different sizes were combined.
    #[error("board length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A row value does not fit the board.
    #[error("row {row} out of range for a board of {size} columns")]
    RowOutOfRange { row: usize, size: usize },

    /// The board is too small for the requested operation.
    #[error("board too small: need at least {min} columns, got {got}")]
    BoardTooSmall { min: usize, got: usize },

    /// An empty population was supplied.
    #[error("population is empty")]
    EmptyPopulation,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
