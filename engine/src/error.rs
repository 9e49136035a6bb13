use thiserror::Error;

/// Invalid parameters handed to the grid engine.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("alive probability {0} must be between 0.0 and 1.0")]
    InvalidProbability(f64),
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("row {index} has {actual} cells, expected {expected}")]
    RaggedRow {
        index: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unexpected character {ch:?} at line {line}, column {column}")]
    UnexpectedChar { ch: char, line: usize, column: usize },
}
