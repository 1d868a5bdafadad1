//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// SAMPLING TESTS
// =============================================================================

#[test]
fn test_default_profile_samples() {
    assert_eq!(DEFAULT_PROFILE_SAMPLES, 300);
    assert!(DEFAULT_PROFILE_SAMPLES >= MIN_PROFILE_SAMPLES);
}

#[test]
fn test_min_profile_samples_spans_curve() {
    // Two intervals are the least that still distinguish throat, apex and mouth
    assert_eq!(MIN_PROFILE_SAMPLES, 2);
}

#[test]
fn test_modulation_samples_at_least_one_per_degree() {
    assert!(MIN_MODULATION_SAMPLES >= 360);
    assert!(DEFAULT_MODULATION_SAMPLES >= MIN_MODULATION_SAMPLES);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_default_resolution_within_limits() {
    assert!((MIN_RINGS..=MAX_RINGS).contains(&DEFAULT_RINGS));
    assert!((MIN_SLICES..=MAX_SLICES).contains(&DEFAULT_SLICES));
}

#[test]
fn test_min_slices_forms_polygon() {
    // A ring needs at least 3 points to enclose an area
    assert!(MIN_SLICES >= 3);
}

#[test]
fn test_parallel_threshold_above_default_mesh() {
    // The reference design stays on the serial path
    let default_vertices = (DEFAULT_RINGS + 1) * (DEFAULT_SLICES + 1);
    assert!(default_vertices < PARALLEL_VERTEX_THRESHOLD);
    // The largest mesh is parallelized
    assert!((MAX_RINGS + 1) * (MAX_SLICES + 1) > PARALLEL_VERTEX_THRESHOLD);
}

// =============================================================================
// SHAPE TESTS
// =============================================================================

#[test]
fn test_throat_exponent_is_ellipse() {
    assert_eq!(THROAT_EXPONENT, 2.0);
}

#[test]
fn test_modulation_floor_in_unit_range() {
    assert!(MODULATION_FLOOR > 0.0 && MODULATION_FLOOR < 1.0);
}

#[test]
fn test_mouth_exponent_not_below_throat() {
    assert!(DEFAULT_MOUTH_EXPONENT >= THROAT_EXPONENT);
}

// =============================================================================
// EXPORT TESTS
// =============================================================================

#[test]
fn test_stl_record_layout() {
    // 12 f32 values plus a u16 attribute
    assert_eq!(STL_RECORD_LEN, 12 * 4 + 2);
    assert_eq!(STL_HEADER_LEN, 80);
    assert_eq!(STL_COUNT_LEN, 4);
}

#[test]
fn test_stl_byte_len() {
    assert_eq!(stl_byte_len(0), 84);
    assert_eq!(stl_byte_len(1), 134);
    assert_eq!(stl_byte_len(100), 84 + 5000);
}

#[test]
fn test_default_header_fits() {
    assert!(DEFAULT_STL_HEADER.len() <= STL_HEADER_LEN);
}

#[test]
fn test_default_normal_is_unit() {
    let [x, y, z] = DEFAULT_NORMAL;
    assert!(approx_zero((x * x + y * y + z * z).sqrt() - 1.0));
}

// =============================================================================
// APPROX_ZERO TESTS
// =============================================================================

#[test]
fn test_approx_zero_within_epsilon() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(EPSILON / 2.0));
    assert!(approx_zero(-EPSILON / 2.0));
}

#[test]
fn test_approx_zero_outside_epsilon() {
    let large = EPSILON * 2.0;
    assert!(!approx_zero(large));
    assert!(!approx_zero(-large));
}

// =============================================================================
// REFERENCE DESIGN TESTS
// =============================================================================

#[test]
fn test_reference_design_is_wider_than_tall() {
    assert!(DEFAULT_HORIZONTAL_RADIUS > DEFAULT_VERTICAL_RADIUS);
    assert!(DEFAULT_HORIZONTAL_COVERAGE > DEFAULT_VERTICAL_COVERAGE);
}

#[test]
fn test_reference_design_apex_shift_in_range() {
    assert!(DEFAULT_APEX_SHIFT > 0.0 && DEFAULT_APEX_SHIFT <= 1.0);
}
