//! # Geometry Errors
//!
//! Error types for profile solving, mesh assembly and shell generation.
//!
//! ## Error Policy
//!
//! - Failures are returned as values, never panics
//! - No partial mesh is returned alongside an error
//! - Degenerate normals and collapsed modulation are handled locally and
//!   never surface here

use std::fmt;

use thiserror::Error;

/// Profile axis a [`ProfileParams`](crate::ProfileParams) set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Width of the mouth (x in the cross-section plane).
    Horizontal,
    /// Height of the mouth (y in the cross-section plane).
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// Errors that can occur while generating waveguide geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The profile equations have no real solution for the given
    /// throat/coverage/expansion combination.
    #[error(
        "No real solution for these throat/coverage/expansion parameters \
         ({axis} profile, discriminant {discriminant:.3})"
    )]
    UnsolvableProfile {
        /// Axis whose profile failed.
        axis: Axis,
        /// The negative (or non-finite) discriminant.
        discriminant: f64,
    },

    /// A parameter lies outside its valid domain.
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name as it appears in the intake structure.
        name: String,
        /// What is wrong with it.
        message: String,
    },

    /// A blend window is empty or inverted.
    #[error("Invalid blend window '{name}': start {start} must be below end {end}")]
    InvalidBlendWindow {
        /// Which window (shape or modulation).
        name: String,
        /// Window start.
        start: f64,
        /// Window end.
        end: f64,
    },

    /// Ring or slice count outside the supported range.
    #[error("Invalid resolution: {rings} rings × {slices} slices")]
    InvalidResolution {
        /// Requested ring intervals.
        rings: usize,
        /// Requested slices.
        slices: usize,
    },
}

impl GeometryError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid blend window error.
    pub fn invalid_window(name: impl Into<String>, start: f64, end: f64) -> Self {
        Self::InvalidBlendWindow {
            name: name.into(),
            start,
            end,
        }
    }
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;
