//! # Configuration Constants
//!
//! Centralized constants for the waveguide geometry pipeline. All sampling
//! densities, tolerances, resolution limits and export layout sizes are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Sampling**: Profile and modulation sample counts
//! - **Resolution**: Ring/slice defaults and limits
//! - **Shape**: Blend exponents and modulation clamps
//! - **Export**: Binary STL layout
//! - **Reference Design**: Default design parameters

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, and as the length below which a normal or edge
/// vector is treated as degenerate.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// let edge_cross: f64 = 1e-12;
/// assert!(edge_cross < EPSILON); // treated as a degenerate face
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Default number of intervals used when sampling an R-OSSE profile.
///
/// The solved curve holds `DEFAULT_PROFILE_SAMPLES + 1` points. Lookups use
/// nearest-sample indexing, so callers needing finer axial accuracy should
/// raise this value.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_PROFILE_SAMPLES;
///
/// let points = DEFAULT_PROFILE_SAMPLES + 1;
/// assert_eq!(points, 301);
/// ```
pub const DEFAULT_PROFILE_SAMPLES: usize = 300;

/// Minimum number of profile intervals accepted by the solver.
pub const MIN_PROFILE_SAMPLES: usize = 2;

/// Default number of angles used to estimate a modulation pattern's mean.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_MODULATION_SAMPLES, MIN_MODULATION_SAMPLES};
///
/// assert!(DEFAULT_MODULATION_SAMPLES >= MIN_MODULATION_SAMPLES);
/// ```
pub const DEFAULT_MODULATION_SAMPLES: usize = 720;

/// Minimum number of angles used to estimate a modulation pattern's mean.
///
/// One sample per degree is the coarsest estimate that keeps the
/// normalized mean within a fraction of a percent for the supported
/// frequency range.
pub const MIN_MODULATION_SAMPLES: usize = 360;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of ring intervals between throat and mouth.
///
/// A mesh built with this value holds `DEFAULT_RINGS + 1` rings.
pub const DEFAULT_RINGS: usize = 50;

/// Default number of angular slices per ring.
///
/// Each ring holds `DEFAULT_SLICES + 1` points; the last one closes the seam.
pub const DEFAULT_SLICES: usize = 72;

/// Minimum number of ring intervals.
pub const MIN_RINGS: usize = 1;

/// Maximum number of ring intervals.
///
/// Safety bound keeping full recomputation cheap enough for interactive use.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_RINGS, MAX_RINGS};
///
/// let requested = 500;
/// let rings = requested.min(MAX_RINGS);
/// assert!(rings >= DEFAULT_RINGS);
/// ```
pub const MAX_RINGS: usize = 200;

/// Minimum number of angular slices (a triangle cross-section).
pub const MIN_SLICES: usize = 3;

/// Maximum number of angular slices.
pub const MAX_SLICES: usize = 256;

/// Vertex count above which ring assembly is distributed across the rayon
/// thread pool.
///
/// Below this size the scheduling overhead outweighs the work per ring.
pub const PARALLEL_VERTEX_THRESHOLD: usize = 16_384;

// =============================================================================
// SHAPE CONSTANTS
// =============================================================================

/// Superellipse exponent of the throat cross-section (a circle/ellipse).
pub const THROAT_EXPONENT: f64 = 2.0;

/// Lower bound applied to the combined modulation multiplier.
///
/// Prevents extreme amplitude/exponent combinations from collapsing or
/// inverting a cross-section. Heuristic, not a physical constant.
///
/// # Example
///
/// ```rust
/// use config::constants::MODULATION_FLOOR;
///
/// let raw_multiplier: f64 = -0.4;
/// assert_eq!(raw_multiplier.max(MODULATION_FLOOR), 0.1);
/// ```
pub const MODULATION_FLOOR: f64 = 0.1;

/// Default wall thickness for shelled exports, in millimetres.
pub const DEFAULT_SHELL_THICKNESS: f64 = 3.0;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Size of the free-form binary STL header, in bytes.
pub const STL_HEADER_LEN: usize = 80;

/// Size of the little-endian triangle count that follows the header.
pub const STL_COUNT_LEN: usize = 4;

/// Size of one binary STL triangle record, in bytes.
///
/// Normal (3 × f32) + three vertices (9 × f32) + u16 attribute.
///
/// # Example
///
/// ```rust
/// use config::constants::{STL_COUNT_LEN, STL_HEADER_LEN, STL_RECORD_LEN};
///
/// let triangles = 12;
/// let bytes = STL_HEADER_LEN + STL_COUNT_LEN + STL_RECORD_LEN * triangles;
/// assert_eq!(bytes, 684);
/// ```
pub const STL_RECORD_LEN: usize = 50;

/// Header text written into exported STL files.
pub const DEFAULT_STL_HEADER: &str = "waveguide-generator binary STL";

/// Fallback unit normal for degenerate faces and vertices.
pub const DEFAULT_NORMAL: [f64; 3] = [0.0, 0.0, 1.0];

// =============================================================================
// REFERENCE DESIGN
// =============================================================================

/// Throat radius of the reference design, in millimetres (a 1" driver exit).
pub const DEFAULT_THROAT_RADIUS: f64 = 12.7;

/// Throat half-angle of the reference design, in degrees.
pub const DEFAULT_THROAT_ANGLE: f64 = 7.5;

/// Expansion factor of the reference design.
pub const DEFAULT_EXPANSION: f64 = 1.8;

/// Horizontal mouth radius of the reference design, in millimetres.
pub const DEFAULT_HORIZONTAL_RADIUS: f64 = 145.0;

/// Horizontal coverage half-angle of the reference design, in degrees.
pub const DEFAULT_HORIZONTAL_COVERAGE: f64 = 45.0;

/// Vertical mouth radius of the reference design, in millimetres.
pub const DEFAULT_VERTICAL_RADIUS: f64 = 95.0;

/// Vertical coverage half-angle of the reference design, in degrees.
pub const DEFAULT_VERTICAL_COVERAGE: f64 = 30.0;

/// Apex radius of the reference design.
pub const DEFAULT_APEX_RADIUS: f64 = 0.3;

/// Apex shift of the reference design.
pub const DEFAULT_APEX_SHIFT: f64 = 0.8;

/// Bending of the reference design.
pub const DEFAULT_BENDING: f64 = 0.3;

/// Throat-shape exponent of the reference design.
pub const DEFAULT_THROAT_SHAPE: f64 = 3.7;

/// Mouth superellipse exponent of the reference design.
pub const DEFAULT_MOUTH_EXPONENT: f64 = 4.5;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Returns the total byte length of a binary STL holding `triangles` records.
///
/// # Example
///
/// ```rust
/// use config::constants::stl_byte_len;
///
/// assert_eq!(stl_byte_len(0), 84);
/// assert_eq!(stl_byte_len(2), 184);
/// ```
#[inline]
pub const fn stl_byte_len(triangles: usize) -> usize {
    STL_HEADER_LEN + STL_COUNT_LEN + STL_RECORD_LEN * triangles
}
