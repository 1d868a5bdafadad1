//! # Design Parameters
//!
//! The complete set of values a caller hands to the engine. Every field has
//! a default, and the defaults reproduce the reference design: a 1" throat
//! opening into a 290 × 190 mm mouth.
//!
//! ## JSON Form
//!
//! ```json
//! {
//!   "horizontal": { "outerRadius": 145.0, "coverageAngle": 45.0 },
//!   "vertical":   { "outerRadius": 95.0,  "coverageAngle": 30.0 },
//!   "shape":      { "nMouth": 4.5 },
//!   "rings": 50,
//!   "slices": 72,
//!   "shell": { "enabled": true, "thickness": 3.0 }
//! }
//! ```
//!
//! Missing fields take their defaults, so partial documents are accepted.
//! Inside a profile object, missing fields fall back to the horizontal
//! reference values.

use config::constants::{
    DEFAULT_MODULATION_SAMPLES, DEFAULT_PROFILE_SAMPLES, DEFAULT_RINGS, DEFAULT_SLICES,
    MAX_RINGS, MAX_SLICES, MIN_RINGS, MIN_SLICES,
};
use serde::{Deserialize, Serialize};

use crate::cross_section::ShapeBlendParams;
use crate::error::{Axis, GeometryError, GeometryResult};
use crate::modulation::{ModulationBlendParams, ModulationParams, PatternKind};
use crate::profile::{CurveLookup, ProfileParams};
use crate::shell::ShellParams;

/// Everything the engine needs for one computation pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaveguideParams {
    /// Horizontal (width) profile.
    pub horizontal: ProfileParams,
    /// Vertical (height) profile.
    pub vertical: ProfileParams,
    /// Circle-to-superellipse transition.
    pub shape: ShapeBlendParams,
    /// Fade-in window shared by both modulation patterns.
    pub modulation_blend: ModulationBlendParams,
    /// `|sin|` modulation pattern.
    pub diagonal: ModulationParams,
    /// `|cos|` modulation pattern.
    pub cardinal: ModulationParams,
    /// Ring intervals between throat and mouth.
    pub rings: usize,
    /// Angular slices per ring.
    pub slices: usize,
    /// Profile sample intervals.
    pub profile_samples: usize,
    /// Angles used to estimate modulation means.
    pub modulation_samples: usize,
    /// Profile lookup mode.
    pub lookup: CurveLookup,
    /// Wall thickness and end caps for export.
    pub shell: ShellParams,
}

impl Default for WaveguideParams {
    fn default() -> Self {
        Self {
            horizontal: ProfileParams::horizontal_default(),
            vertical: ProfileParams::vertical_default(),
            shape: ShapeBlendParams::default(),
            modulation_blend: ModulationBlendParams::default(),
            diagonal: ModulationParams::default(),
            cardinal: ModulationParams::default(),
            rings: DEFAULT_RINGS,
            slices: DEFAULT_SLICES,
            profile_samples: DEFAULT_PROFILE_SAMPLES,
            modulation_samples: DEFAULT_MODULATION_SAMPLES,
            lookup: CurveLookup::Nearest,
            shell: ShellParams::default(),
        }
    }
}

impl WaveguideParams {
    /// Checks the whole parameter set before a computation pass.
    ///
    /// This is stricter than the engine itself: an empty or inverted blend
    /// window is rejected here, although the blend primitives would accept
    /// it and degrade to a hard step.
    pub fn validate(&self) -> GeometryResult<()> {
        self.horizontal.validate(Axis::Horizontal)?;
        self.vertical.validate(Axis::Vertical)?;
        self.shape.validate()?;
        self.modulation_blend.validate()?;
        self.diagonal.validate(PatternKind::Diagonal)?;
        self.cardinal.validate(PatternKind::Cardinal)?;
        validate_resolution(self.rings, self.slices)?;
        self.shell.validate()?;
        Ok(())
    }
}

/// Checks ring and slice counts against the supported range.
pub fn validate_resolution(rings: usize, slices: usize) -> GeometryResult<()> {
    if !(MIN_RINGS..=MAX_RINGS).contains(&rings) || !(MIN_SLICES..=MAX_SLICES).contains(&slices) {
        return Err(GeometryError::InvalidResolution { rings, slices });
    }
    Ok(())
}
