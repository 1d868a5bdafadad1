//! # Config Crate
//!
//! Centralized configuration constants for the waveguide geometry pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_RINGS, DEFAULT_SLICES, EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // A default mesh holds (rings + 1) × (slices + 1) vertices
//! let vertices = (DEFAULT_RINGS + 1) * (DEFAULT_SLICES + 1);
//! assert_eq!(vertices, 51 * 73);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
