//! # Profile Solver
//!
//! Solves the R-OSSE (Radial Oblate Spheroid Symmetric Expansion) equations
//! for one axis and samples them into an immutable lookup curve.
//!
//! ## Algorithm
//!
//! ```text
//! c1   = (k·r0)²
//! c2   = 2·k·r0·tan(a0)
//! c3   = tan²(a)
//! disc = c2² − 4·c3·(c1 − (R + r0·(k−1))²)
//! L    = (√disc − c2) / (2·c3)
//!
//! x(t) = L·[√(ρ²+m²) − √(ρ²+(t−m)²)] + b·L·[√(ρ²+(1−m)²) − √(ρ²+m²)]·t²
//! y(t) = (1−t^q)·[√(c1 + c2·L·t + c3·L²t²) + r0·(1−k)]
//!      + t^q·[R + L·(1 − √(1 + c3·(t−1)²))]
//! ```
//!
//! A negative discriminant means the angle/radius/expansion combination has
//! no real geometric solution and is reported as
//! [`GeometryError::UnsolvableProfile`].
//!
//! Past the apex shift `m` the axial coordinate turns back towards the
//! throat (the rounded mouth termination), so `x(t)` is only guaranteed to
//! grow on the throat side of the apex.

use config::constants::{
    DEFAULT_APEX_RADIUS, DEFAULT_APEX_SHIFT, DEFAULT_BENDING, DEFAULT_EXPANSION,
    DEFAULT_HORIZONTAL_COVERAGE, DEFAULT_HORIZONTAL_RADIUS, DEFAULT_THROAT_ANGLE,
    DEFAULT_THROAT_RADIUS, DEFAULT_THROAT_SHAPE, DEFAULT_VERTICAL_COVERAGE,
    DEFAULT_VERTICAL_RADIUS, MIN_PROFILE_SAMPLES,
};
use serde::{Deserialize, Serialize};

use crate::error::{Axis, GeometryError, GeometryResult};

/// R-OSSE design parameters for one axis.
///
/// Angles are given in degrees; lengths in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileParams {
    /// Mouth radius `R`.
    pub outer_radius: f64,
    /// Throat radius `r0`.
    pub throat_radius: f64,
    /// Throat half-angle `a0` in degrees.
    pub throat_angle: f64,
    /// Coverage half-angle `a` in degrees.
    pub coverage_angle: f64,
    /// Expansion factor `k`.
    pub expansion: f64,
    /// Apex radius `rho`.
    pub apex_radius: f64,
    /// Bending `b`.
    pub bending: f64,
    /// Apex shift `m`.
    pub apex_shift: f64,
    /// Throat-shape exponent `q`.
    pub throat_shape: f64,
}

impl Default for ProfileParams {
    fn default() -> Self {
        Self::horizontal_default()
    }
}

impl ProfileParams {
    /// Horizontal profile of the reference design (290 mm wide, ±45°).
    pub fn horizontal_default() -> Self {
        Self {
            outer_radius: DEFAULT_HORIZONTAL_RADIUS,
            throat_radius: DEFAULT_THROAT_RADIUS,
            throat_angle: DEFAULT_THROAT_ANGLE,
            coverage_angle: DEFAULT_HORIZONTAL_COVERAGE,
            expansion: DEFAULT_EXPANSION,
            apex_radius: DEFAULT_APEX_RADIUS,
            bending: DEFAULT_BENDING,
            apex_shift: DEFAULT_APEX_SHIFT,
            throat_shape: DEFAULT_THROAT_SHAPE,
        }
    }

    /// Vertical profile of the reference design (190 mm tall, ±30°).
    pub fn vertical_default() -> Self {
        Self {
            outer_radius: DEFAULT_VERTICAL_RADIUS,
            coverage_angle: DEFAULT_VERTICAL_COVERAGE,
            ..Self::horizontal_default()
        }
    }

    /// Checks the parameter invariants.
    ///
    /// All values must be finite. `R`, `r0`, `k`, `rho`, `q` must be
    /// positive, `b` and `a0` non-negative, `0 < m ≤ 1`, and both angles
    /// below 90°. A zero throat angle is accepted (parallel throat entry).
    pub fn validate(&self, axis: Axis) -> GeometryResult<()> {
        let name = |field: &str| format!("{}.{}", axis, field);
        let positive = [
            ("outerRadius", self.outer_radius),
            ("throatRadius", self.throat_radius),
            ("coverageAngle", self.coverage_angle),
            ("expansion", self.expansion),
            ("apexRadius", self.apex_radius),
            ("throatShape", self.throat_shape),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GeometryError::invalid_parameter(
                    name(field),
                    format!("must be a positive number, got {}", value),
                ));
            }
        }
        for (field, value) in [("bending", self.bending), ("throatAngle", self.throat_angle)] {
            if !value.is_finite() || value < 0.0 {
                return Err(GeometryError::invalid_parameter(
                    name(field),
                    format!("must be non-negative, got {}", value),
                ));
            }
        }
        if !(self.apex_shift > 0.0 && self.apex_shift <= 1.0) {
            return Err(GeometryError::invalid_parameter(
                name("apexShift"),
                format!("must lie in (0, 1], got {}", self.apex_shift),
            ));
        }
        for (field, value) in [
            ("throatAngle", self.throat_angle),
            ("coverageAngle", self.coverage_angle),
        ] {
            if value >= 90.0 {
                return Err(GeometryError::invalid_parameter(
                    name(field),
                    format!("must be below 90 degrees, got {}", value),
                ));
            }
        }
        Ok(())
    }
}

/// How a [`ProfileCurve`] is read between samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurveLookup {
    /// Round `t·N` to the closest sample.
    #[default]
    Nearest,
    /// Interpolate linearly between the two bracketing samples.
    Linear,
}

/// One `(t, x, y)` point of a sampled profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSample {
    /// Curve parameter in `[0, 1]`.
    pub t: f64,
    /// Axial position.
    pub x: f64,
    /// Radial half-extent.
    pub y: f64,
}

/// Sampled R-OSSE profile for one axis.
///
/// Immutable once solved. Consumers read it through [`ProfileCurve::x_at`],
/// [`ProfileCurve::y_at`] or [`ProfileCurve::sample_at`].
///
/// # Example
///
/// ```rust
/// use waveguide_geometry::{Axis, ProfileCurve, ProfileParams};
///
/// let params = ProfileParams::horizontal_default();
/// let curve = ProfileCurve::solve(&params, Axis::Horizontal, 300).unwrap();
///
/// assert_eq!(curve.samples().len(), 301);
/// assert!((curve.y_at(0.0) - 12.7).abs() < 1e-9);
/// assert!((curve.y_at(1.0) - 145.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCurve {
    samples: Vec<ProfileSample>,
    length: f64,
    c1: f64,
    c2: f64,
    c3: f64,
}

impl ProfileCurve {
    /// Solves the profile equations and samples `resolution + 1` points.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::InvalidParameter`] when `params` break their
    ///   invariants or `resolution` is below the minimum.
    /// - [`GeometryError::UnsolvableProfile`] when the discriminant is
    ///   negative or the solution is not finite.
    pub fn solve(
        params: &ProfileParams,
        axis: Axis,
        resolution: usize,
    ) -> GeometryResult<Self> {
        params.validate(axis)?;
        if resolution < MIN_PROFILE_SAMPLES {
            return Err(GeometryError::invalid_parameter(
                "profileSamples",
                format!("must be at least {}, got {}", MIN_PROFILE_SAMPLES, resolution),
            ));
        }

        let r_mouth = params.outer_radius;
        let r0 = params.throat_radius;
        let k = params.expansion;
        let rho = params.apex_radius;
        let m = params.apex_shift;
        let b = params.bending;
        let q = params.throat_shape;

        let c1 = (k * r0).powi(2);
        let c2 = 2.0 * k * r0 * params.throat_angle.to_radians().tan();
        let c3 = params.coverage_angle.to_radians().tan().powi(2);
        let discriminant = c2 * c2 - 4.0 * c3 * (c1 - (r_mouth + r0 * (k - 1.0)).powi(2));

        if !discriminant.is_finite() || discriminant < 0.0 {
            return Err(GeometryError::UnsolvableProfile { axis, discriminant });
        }

        let length = (discriminant.sqrt() - c2) / (2.0 * c3);
        if !length.is_finite() || length <= 0.0 {
            return Err(GeometryError::UnsolvableProfile { axis, discriminant });
        }

        let apex = (rho * rho + m * m).sqrt();
        let bend = b * length * ((rho * rho + (1.0 - m).powi(2)).sqrt() - apex);

        let samples: Vec<ProfileSample> = (0..=resolution)
            .map(|i| {
                let t = i as f64 / resolution as f64;
                let x = length * (apex - (rho * rho + (t - m).powi(2)).sqrt()) + bend * t * t;
                let tq = t.powf(q);
                let throat = (c1 + c2 * length * t + c3 * length * length * t * t).sqrt()
                    + r0 * (1.0 - k);
                let mouth = r_mouth + length * (1.0 - (1.0 + c3 * (t - 1.0).powi(2)).sqrt());
                let y = (1.0 - tq) * throat + tq * mouth;
                ProfileSample { t, x, y }
            })
            .collect();

        if samples.iter().any(|s| !s.x.is_finite() || !s.y.is_finite()) {
            return Err(GeometryError::UnsolvableProfile { axis, discriminant });
        }

        log::debug!(
            "Solved {} profile: L = {:.3}, {} samples",
            axis,
            length,
            samples.len()
        );

        Ok(Self {
            samples,
            length,
            c1,
            c2,
            c3,
        })
    }

    /// Returns the sampled points, throat first.
    #[inline]
    pub fn samples(&self) -> &[ProfileSample] {
        &self.samples
    }

    /// Number of sample intervals `N` (one less than the point count).
    #[inline]
    pub fn resolution(&self) -> usize {
        self.samples.len() - 1
    }

    /// Solved axial length `L`.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Auxiliary coefficients `(c1, c2, c3)`.
    #[inline]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.c1, self.c2, self.c3)
    }

    /// Index of the sample closest to `t` (`round(t·N)`, clamped).
    #[inline]
    pub fn nearest_index(&self, t: f64) -> usize {
        let n = self.resolution();
        let index = (t * n as f64).round();
        if index.is_nan() || index <= 0.0 {
            0
        } else {
            (index as usize).min(n)
        }
    }

    /// Axial position at `t` (nearest sample).
    #[inline]
    pub fn x_at(&self, t: f64) -> f64 {
        self.samples[self.nearest_index(t)].x
    }

    /// Radial half-extent at `t` (nearest sample).
    #[inline]
    pub fn y_at(&self, t: f64) -> f64 {
        self.samples[self.nearest_index(t)].y
    }

    /// Reads the curve at `t` with the requested lookup mode.
    ///
    /// The returned sample carries the requested `t`, not the grid value.
    pub fn sample_at(&self, t: f64, lookup: CurveLookup) -> ProfileSample {
        match lookup {
            CurveLookup::Nearest => {
                let s = self.samples[self.nearest_index(t)];
                ProfileSample { t, x: s.x, y: s.y }
            }
            CurveLookup::Linear => {
                let n = self.resolution();
                let unit = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
                let scaled = unit * n as f64;
                let lower = (scaled.floor() as usize).min(n - 1);
                let frac = (scaled - lower as f64).clamp(0.0, 1.0);
                let a = self.samples[lower];
                let b = self.samples[lower + 1];
                ProfileSample {
                    t,
                    x: a.x + frac * (b.x - a.x),
                    y: a.y + frac * (b.y - a.y),
                }
            }
        }
    }
}
