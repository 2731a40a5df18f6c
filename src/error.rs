//! Error types for grid operations

use thiserror::Error;

/// Errors raised by the grid engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Coordinate outside the current grid dimensions
    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Dimensions or arguments the grid cannot represent
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Rows of differing length passed to `Grid::from_cells`
    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
}

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;
