//! # Cross-Section Generator
//!
//! Builds the superellipse boundary of one axial station. The half-width
//! and half-height blend from the circular throat radius to the profile
//! guides, and the exponent blends from 2 (ellipse) to the mouth exponent,
//! both over the same shape window.
//!
//! ## Parametric Form
//!
//! ```text
//! px = y_h · sgn(cos θ) · |cos θ|^(2/n)
//! py = y_v · sgn(sin θ) · |sin θ|^(2/n)
//! ```
//!
//! which traces `|x / y_h|^n + |y / y_v|^n = 1`.

use config::constants::{DEFAULT_MOUTH_EXPONENT, THROAT_EXPONENT};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::blend::smooth_lerp;
use crate::error::{GeometryError, GeometryResult};
use crate::profile::{CurveLookup, ProfileCurve};

/// Controls the circle-to-superellipse transition along the horn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeBlendParams {
    /// Superellipse exponent at the mouth (≥ 2).
    pub n_mouth: f64,
    /// Start of the blend window in `t`.
    pub shape_start: f64,
    /// End of the blend window in `t`.
    pub shape_end: f64,
    /// Blend power applied to the smoothstep.
    pub shape_pow: f64,
}

impl Default for ShapeBlendParams {
    fn default() -> Self {
        Self {
            n_mouth: DEFAULT_MOUTH_EXPONENT,
            shape_start: 0.0,
            shape_end: 1.0,
            shape_pow: 1.0,
        }
    }
}

impl ShapeBlendParams {
    /// Checks the exponent, power and window.
    pub fn validate(&self) -> GeometryResult<()> {
        self.validate_exponents()?;
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !in_unit(self.shape_start) || !in_unit(self.shape_end) || self.shape_start >= self.shape_end {
            return Err(GeometryError::invalid_window("shape", self.shape_start, self.shape_end));
        }
        Ok(())
    }

    /// Checks the mouth exponent and smoothstep power, leaving the window
    /// alone.
    pub fn validate_exponents(&self) -> GeometryResult<()> {
        if !self.n_mouth.is_finite() || self.n_mouth < THROAT_EXPONENT {
            return Err(GeometryError::invalid_parameter(
                "shape.nMouth",
                format!("must be at least {}, got {}", THROAT_EXPONENT, self.n_mouth),
            ));
        }
        if !self.shape_pow.is_finite() || self.shape_pow <= 0.0 {
            return Err(GeometryError::invalid_parameter(
                "shape.shapePow",
                format!("must be positive, got {}", self.shape_pow),
            ));
        }
        Ok(())
    }
}

/// Blended station parameters at one `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossSection {
    /// Station parameter.
    pub t: f64,
    /// Axial position, taken from the horizontal profile.
    pub x_h: f64,
    /// Blended half-width.
    pub y_h: f64,
    /// Blended half-height.
    pub y_v: f64,
    /// Blended superellipse exponent.
    pub n: f64,
}

impl CrossSection {
    /// Evaluates the station at `t`.
    ///
    /// `throat_h` and `throat_v` are the throat radii of the two profiles;
    /// the station starts from them and follows the raw guides once the
    /// shape window has passed.
    pub fn at(
        t: f64,
        horizontal: &ProfileCurve,
        vertical: &ProfileCurve,
        throat_h: f64,
        throat_v: f64,
        shape: &ShapeBlendParams,
        lookup: CurveLookup,
    ) -> Self {
        let h = horizontal.sample_at(t, lookup);
        let v = vertical.sample_at(t, lookup);
        let blend = |from: f64, to: f64| {
            smooth_lerp(from, to, t, shape.shape_start, shape.shape_end, shape.shape_pow)
        };

        Self {
            t,
            x_h: h.x,
            y_h: blend(throat_h, h.y),
            y_v: blend(throat_v, v.y),
            n: blend(THROAT_EXPONENT, shape.n_mouth),
        }
    }

    /// Superellipse boundary point at angle `theta` (radians).
    #[inline]
    pub fn point(&self, theta: f64) -> DVec2 {
        superellipse_point(theta, self.y_h, self.y_v, self.n)
    }
}

/// Point on `|x/a|^n + |y/b|^n = 1` at parametric angle `theta`.
///
/// # Example
///
/// ```rust
/// use waveguide_geometry::cross_section::superellipse_point;
///
/// let p = superellipse_point(0.0, 10.0, 5.0, 4.0);
/// assert_eq!(p.x, 10.0);
/// assert_eq!(p.y, 0.0);
/// ```
#[inline]
pub fn superellipse_point(theta: f64, a: f64, b: f64, n: f64) -> DVec2 {
    let (sin, cos) = theta.sin_cos();
    let e = 2.0 / n;
    DVec2::new(
        a * cos.signum() * cos.abs().powf(e),
        b * sin.signum() * sin.abs().powf(e),
    )
}
