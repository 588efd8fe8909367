use thiserror::Error;

use crate::position::Position;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("{position} is outside of the {width}x{height} grid")]
    OutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },
    #[error("expected a {expected_width}x{expected_height} mask but got {width}x{height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },
    #[error("a grid needs at least one square, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("row {row} has a different length than the first row")]
    RaggedRows { row: usize },
    #[error("weight {weight} at {position} must be finite and not negative")]
    InvalidWeight { position: Position, weight: f64 },
}
