//! # Export Errors
//!
//! Error types for triangulation and binary STL encoding.

use thiserror::Error;
use waveguide_geometry::GeometryError;

/// Errors that can occur while exporting a waveguide.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The mesh or shell could not be generated.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Triangulation produced a different number of triangles than the
    /// grid dimensions call for.
    #[error("Triangle count mismatch: expected {expected}, got {actual}")]
    TriangleCountMismatch {
        /// Count derived from rings, slices and caps.
        expected: usize,
        /// Count actually produced.
        actual: usize,
    },

    /// A byte buffer is not a well-formed binary STL.
    #[error("Invalid STL: {message}")]
    InvalidStl {
        /// What is wrong with the buffer.
        message: String,
    },

    /// Writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Creates an invalid STL error.
    pub fn invalid_stl(message: impl Into<String>) -> Self {
        Self::InvalidStl {
            message: message.into(),
        }
    }
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;
    use waveguide_geometry::Axis;

    #[test]
    fn test_geometry_error_passes_through() {
        let err: ExportError = GeometryError::UnsolvableProfile {
            axis: Axis::Horizontal,
            discriminant: -3.0,
        }
        .into();
        assert!(err.to_string().starts_with("No real solution"));
        assert!(matches!(err, ExportError::Geometry(_)));
    }

    #[test]
    fn test_count_mismatch_display() {
        let err = ExportError::TriangleCountMismatch {
            expected: 7488,
            actual: 7200,
        };
        assert_eq!(err.to_string(), "Triangle count mismatch: expected 7488, got 7200");
    }

    #[test]
    fn test_invalid_stl_display() {
        assert_eq!(
            ExportError::invalid_stl("too short").to_string(),
            "Invalid STL: too short"
        );
    }
}
