//! Error types for the board engine, the board service and input parsing

use thiserror::Error;

/// Errors raised by the generation engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// `stabilize` ran out of budget before two consecutive generations matched
    #[error("board did not reach a stable state within {max_iterations} iterations")]
    NotStable { max_iterations: usize },
}

/// Errors raised by the board service
///
/// An unknown board id is not an error: service lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    NotStable(#[from] EngineError),

    #[error(transparent)]
    InvalidInput(#[from] InputError),

    /// Failure reported by the storage collaborator
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Malformed input rejected before it reaches the engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("pattern is empty or contains no valid rows")]
    EmptyPattern,

    #[error("row {row} has length {len}, expected {expected} (all rows must have the same length)")]
    RaggedRow { row: usize, len: usize, expected: usize },

    #[error("invalid character '{ch}' at position ({row}, {col}); only '0' and '1' are allowed")]
    InvalidCharacter { ch: char, row: usize, col: usize },

    #[error("cell ({x}, {y}) is outside the supported range of ±2^62")]
    CoordinateOutOfRange { x: i64, y: i64 },

    #[error("invalid board id '{0}': expected 32 hex digits")]
    InvalidBoardId(String),

    #[error("iteration budget must be positive")]
    ZeroIterationBudget,
}

impl ServiceError {
    /// True when the failure is the engine's not-stable outcome
    pub fn is_not_stable(&self) -> bool {
        matches!(self, ServiceError::NotStable(EngineError::NotStable { .. }))
    }
}
