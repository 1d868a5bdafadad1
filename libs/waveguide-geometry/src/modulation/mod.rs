//! # Modulation System
//!
//! Area-preserving angular perturbation of the cross-section radius.
//!
//! Two independent patterns are supported:
//!
//! ```text
//! diagonal(θ) = base + amp · |sin(freq·θ)|^exp
//! cardinal(θ) = base + amp · |cos(freq·θ)|^exp
//! ```
//!
//! Each enabled pattern is divided by its own mean over one revolution, so
//! the combined multiplier averages to 1 once modulation is fully engaged
//! and the mean cross-sectional size is unchanged. The multiplier fades in
//! along the horn through a powered smoothstep and is floored at
//! [`MODULATION_FLOOR`] to keep every ring from collapsing.

use std::f64::consts::TAU;

use config::constants::{approx_zero, MIN_MODULATION_SAMPLES, MODULATION_FLOOR};
use serde::{Deserialize, Serialize};

use crate::blend::powered_smoothstep;
use crate::error::{GeometryError, GeometryResult};

/// Which trigonometric basis a pattern uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// `|sin|` lobes, peaking between the axes for even frequencies.
    Diagonal,
    /// `|cos|` lobes, peaking on the axes for even frequencies.
    Cardinal,
}

impl PatternKind {
    fn label(self) -> &'static str {
        match self {
            PatternKind::Diagonal => "diagonal",
            PatternKind::Cardinal => "cardinal",
        }
    }
}

/// Parameters of one angular pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModulationParams {
    /// Whether the pattern contributes at all.
    pub enabled: bool,
    /// Constant offset in `[0, 1]`.
    pub base: f64,
    /// Lobe amplitude (≥ 0).
    pub amp: f64,
    /// Angular frequency (> 0).
    pub freq: f64,
    /// Lobe sharpness exponent (≥ 1).
    pub exp: f64,
}

impl Default for ModulationParams {
    fn default() -> Self {
        Self {
            enabled: false,
            base: 0.8,
            amp: 0.2,
            freq: 2.0,
            exp: 2.0,
        }
    }
}

impl ModulationParams {
    /// Checks the pattern's domain. Disabled patterns are not checked.
    pub fn validate(&self, kind: PatternKind) -> GeometryResult<()> {
        if !self.enabled {
            return Ok(());
        }
        let name = |field: &str| format!("{}.{}", kind.label(), field);
        if !(0.0..=1.0).contains(&self.base) {
            return Err(GeometryError::invalid_parameter(
                name("base"),
                format!("must lie in [0, 1], got {}", self.base),
            ));
        }
        if !self.amp.is_finite() || self.amp < 0.0 {
            return Err(GeometryError::invalid_parameter(
                name("amp"),
                format!("must be non-negative, got {}", self.amp),
            ));
        }
        if !self.freq.is_finite() || self.freq <= 0.0 {
            return Err(GeometryError::invalid_parameter(
                name("freq"),
                format!("must be positive, got {}", self.freq),
            ));
        }
        if !self.exp.is_finite() || self.exp < 1.0 {
            return Err(GeometryError::invalid_parameter(
                name("exp"),
                format!("must be at least 1, got {}", self.exp),
            ));
        }
        Ok(())
    }

    /// Raw, unnormalized pattern value at `theta`.
    #[inline]
    pub fn raw(&self, kind: PatternKind, theta: f64) -> f64 {
        let phase = self.freq * theta;
        let lobe = match kind {
            PatternKind::Diagonal => phase.sin(),
            PatternKind::Cardinal => phase.cos(),
        };
        self.base + self.amp * lobe.abs().powf(self.exp)
    }

    /// Mean of the raw pattern over one revolution, estimated from
    /// `samples` evenly spaced angles. Disabled patterns average to 1.
    pub fn average(&self, kind: PatternKind, samples: usize) -> f64 {
        if !self.enabled {
            return 1.0;
        }
        let samples = samples.max(1);
        let sum: f64 = (0..samples)
            .map(|i| self.raw(kind, TAU * i as f64 / samples as f64))
            .sum();
        sum / samples as f64
    }
}

/// Shared fade-in window for both patterns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModulationBlendParams {
    /// Start of the fade-in window in `t`.
    pub mod_start: f64,
    /// End of the fade-in window in `t`.
    pub mod_end: f64,
    /// Power applied to the smoothstep.
    pub mod_pow: f64,
}

impl Default for ModulationBlendParams {
    fn default() -> Self {
        Self {
            mod_start: 0.3,
            mod_end: 1.0,
            mod_pow: 1.5,
        }
    }
}

impl ModulationBlendParams {
    /// Checks the window and power.
    pub fn validate(&self) -> GeometryResult<()> {
        self.validate_power()?;
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !in_unit(self.mod_start) || !in_unit(self.mod_end) || self.mod_start >= self.mod_end {
            return Err(GeometryError::invalid_window(
                "modulation",
                self.mod_start,
                self.mod_end,
            ));
        }
        Ok(())
    }

    /// Checks the smoothstep power only. Empty windows are left to degrade
    /// to a step.
    pub fn validate_power(&self) -> GeometryResult<()> {
        if !self.mod_pow.is_finite() || self.mod_pow <= 0.0 {
            return Err(GeometryError::invalid_parameter(
                "modulationBlend.modPow",
                format!("must be positive, got {}", self.mod_pow),
            ));
        }
        Ok(())
    }

    /// Engagement factor `mf` at station `t`.
    #[inline]
    pub fn factor(&self, t: f64) -> f64 {
        powered_smoothstep(t, self.mod_start, self.mod_end, self.mod_pow)
    }
}

/// Both patterns with their pre-sampled means, ready for per-vertex
/// evaluation.
///
/// # Example
///
/// ```rust
/// use waveguide_geometry::modulation::{ModulationBlendParams, ModulationField, ModulationParams};
///
/// let field = ModulationField::new(
///     ModulationParams::default(),
///     ModulationParams::default(),
///     ModulationBlendParams::default(),
///     720,
/// )
/// .unwrap();
///
/// // Both patterns disabled: no perturbation anywhere
/// assert!(field.is_identity());
/// assert_eq!(field.multiplier(1.2, 1.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModulationField {
    diagonal: ModulationParams,
    cardinal: ModulationParams,
    blend: ModulationBlendParams,
    avg_diagonal: f64,
    avg_cardinal: f64,
}

impl ModulationField {
    /// Validates the patterns and samples their means.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidParameter`] for out-of-domain
    /// pattern values, a non-positive fade-in power, or fewer than the
    /// minimum samples.
    ///
    /// An enabled pattern with `base = 0` and `amp = 0` is zero everywhere
    /// and has no mean to normalize by; it is treated as flat and
    /// contributes nothing.
    pub fn new(
        diagonal: ModulationParams,
        cardinal: ModulationParams,
        blend: ModulationBlendParams,
        samples: usize,
    ) -> GeometryResult<Self> {
        diagonal.validate(PatternKind::Diagonal)?;
        cardinal.validate(PatternKind::Cardinal)?;
        blend.validate_power()?;
        if samples < MIN_MODULATION_SAMPLES {
            return Err(GeometryError::invalid_parameter(
                "modulationSamples",
                format!("must be at least {}, got {}", MIN_MODULATION_SAMPLES, samples),
            ));
        }

        let diagonal = flatten_zero_pattern(diagonal, PatternKind::Diagonal, samples);
        let cardinal = flatten_zero_pattern(cardinal, PatternKind::Cardinal, samples);
        let avg_diagonal = diagonal.average(PatternKind::Diagonal, samples);
        let avg_cardinal = cardinal.average(PatternKind::Cardinal, samples);

        Ok(Self {
            diagonal,
            cardinal,
            blend,
            avg_diagonal,
            avg_cardinal,
        })
    }

    /// True when neither pattern is enabled.
    #[inline]
    pub fn is_identity(&self) -> bool {
        !self.diagonal.enabled && !self.cardinal.enabled
    }

    /// Sampled mean of the diagonal pattern (1 when disabled).
    #[inline]
    pub fn avg_diagonal(&self) -> f64 {
        self.avg_diagonal
    }

    /// Sampled mean of the cardinal pattern (1 when disabled).
    #[inline]
    pub fn avg_cardinal(&self) -> f64 {
        self.avg_cardinal
    }

    /// Combined radial multiplier at angle `theta` and station `t`.
    pub fn multiplier(&self, theta: f64, t: f64) -> f64 {
        if self.is_identity() {
            return 1.0;
        }
        let mf = self.blend.factor(t);
        let mut multiplier = 1.0;
        if self.diagonal.enabled {
            let raw = self.diagonal.raw(PatternKind::Diagonal, theta);
            multiplier += mf * (raw / self.avg_diagonal - 1.0);
        }
        if self.cardinal.enabled {
            let raw = self.cardinal.raw(PatternKind::Cardinal, theta);
            multiplier += mf * (raw / self.avg_cardinal - 1.0);
        }
        if multiplier < MODULATION_FLOOR {
            log::trace!(
                "Modulation multiplier {:.4} floored at θ = {:.4}, t = {:.4}",
                multiplier,
                theta,
                t
            );
        }
        multiplier.max(MODULATION_FLOOR)
    }
}

/// Disables an enabled pattern whose sampled mean is zero.
fn flatten_zero_pattern(params: ModulationParams, kind: PatternKind, samples: usize) -> ModulationParams {
    if params.enabled && approx_zero(params.average(kind, samples)) {
        log::debug!("{} pattern is zero everywhere; treating it as flat", kind.label());
        return ModulationParams {
            enabled: false,
            ..params
        };
    }
    params
}
