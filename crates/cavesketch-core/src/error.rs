//! Error handling for geometry utilities.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Represents invalid inputs to the geometry utilities.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// An operation that needs at least one point was given none
    #[error("Path has no points")]
    EmptyPath,

    /// Simplification tolerance must be finite and non-negative
    #[error("Invalid simplification epsilon: {0}")]
    InvalidEpsilon(f64),
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;
