use thiserror::Error;

/// Top-level error type for planarization.
#[derive(Debug, Error)]
pub enum PlanarizeError {
    #[error(transparent)]
    Intersection(#[from] IntersectionError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised by an intersection engine.
#[derive(Debug, Error, PartialEq)]
pub enum IntersectionError {
    #[error("segment {segment} has a non-finite endpoint coordinate")]
    NonFiniteCoordinate { segment: usize },

    #[error("grid cell size must be positive and finite, got {0}")]
    InvalidCellSize(f64),
}

/// Errors related to planarize operations.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PlanarizeError`].
pub type Result<T> = std::result::Result<T, PlanarizeError>;
