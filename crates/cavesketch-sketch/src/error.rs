//! Error types for sketch editing.

use cavesketch_core::GeometryError;
use thiserror::Error;

/// Errors raised when an editing call is made in the wrong state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SketchError {
    /// `start_path` was called while another path is still being drawn
    #[error("A path is already being drawn")]
    PathAlreadyActive,

    /// A path operation was called with no path being drawn
    #[error("No path is being drawn")]
    NoActivePath,

    /// A path detail was built from no points
    #[error("Path has no points")]
    EmptyPath,

    /// Settings handed to a new sketch failed validation
    #[error("Invalid sketch settings: {0}")]
    InvalidSettings(String),

    /// Geometry utility rejected its input
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

/// Result type alias for sketch operations.
pub type SketchResult<T> = Result<T, SketchError>;
