//! Error types for distance computations.

use thiserror::Error;

/// Errors raised when a caller-supplied argument violates the engine's contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// A negative maximum distance was supplied.
    ///
    /// Thresholds are never clamped to zero; a negative value is always a
    /// mistake at the call site.
    #[error("Maximum distance must be non-negative, got {0}")]
    NegativeThreshold(i64),

    /// A threshold could not be parsed from text.
    #[error("Invalid maximum distance '{0}': expected a non-negative integer or 'unbounded'")]
    InvalidThreshold(String),
}

/// A specialized `Result` type for distance operations.
pub type Result<T> = std::result::Result<T, DistanceError>;
