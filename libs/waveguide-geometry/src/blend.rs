//! # Blend Engine
//!
//! Smoothstep-family interpolation shared by every shape and modulation
//! transition. Each curve has zero slope at both ends of its window, so a
//! transition routed through these functions never introduces a crease
//! where it starts or stops.
//!
//! A degenerate window (`start >= end`) turns every function into a step
//! at `end`.

/// Cubic Hermite ease over `[start, end]`.
///
/// Returns 0 for `t <= start`, 1 for `t >= end`, and `3s² − 2s³` in between
/// with `s = (t − start) / (end − start)`.
///
/// # Example
///
/// ```rust
/// use waveguide_geometry::blend::smoothstep;
///
/// assert_eq!(smoothstep(0.1, 0.2, 0.8), 0.0);
/// assert_eq!(smoothstep(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(smoothstep(0.9, 0.2, 0.8), 1.0);
/// ```
#[inline]
pub fn smoothstep(t: f64, start: f64, end: f64) -> f64 {
    if start >= end {
        return if t < end { 0.0 } else { 1.0 };
    }
    if t <= start {
        return 0.0;
    }
    if t >= end {
        return 1.0;
    }
    let s = ((t - start) / (end - start)).clamp(0.0, 1.0);
    s * s * (3.0 - 2.0 * s)
}

/// [`smoothstep`] raised to `power`.
///
/// Powers above 1 delay the transition towards `end`; powers below 1 pull
/// it towards `start`. Both endpoints keep zero slope.
#[inline]
pub fn powered_smoothstep(t: f64, start: f64, end: f64, power: f64) -> f64 {
    smoothstep(t, start, end).powf(power)
}

/// Linear interpolation `a + f(b − a)`.
#[inline]
pub fn lerp(a: f64, b: f64, f: f64) -> f64 {
    a + f * (b - a)
}

/// Interpolates from `a` to `b` along a powered smoothstep.
///
/// # Example
///
/// ```rust
/// use waveguide_geometry::blend::smooth_lerp;
///
/// // Circle at the throat, superellipse at the mouth
/// assert_eq!(smooth_lerp(2.0, 4.5, 0.0, 0.0, 1.0, 1.0), 2.0);
/// assert_eq!(smooth_lerp(2.0, 4.5, 1.0, 0.0, 1.0, 1.0), 4.5);
/// ```
#[inline]
pub fn smooth_lerp(a: f64, b: f64, t: f64, start: f64, end: f64, power: f64) -> f64 {
    lerp(a, b, powered_smoothstep(t, start, end, power))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_smoothstep_endpoints() {
        assert_eq!(smoothstep(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(smoothstep(0.0, 0.0, 1.0), 0.0);
        assert_eq!(smoothstep(1.0, 0.0, 1.0), 1.0);
        assert_eq!(smoothstep(2.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_smoothstep_midpoint_and_symmetry() {
        assert_abs_diff_eq!(smoothstep(0.5, 0.0, 1.0), 0.5, epsilon = 1e-12);
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let mirrored = 1.0 - smoothstep(1.0 - t, 0.0, 1.0);
            assert_abs_diff_eq!(smoothstep(t, 0.0, 1.0), mirrored, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_smoothstep_flat_at_window_edges() {
        // Central difference slope vanishes at both ends
        let h = 1e-6;
        let slope_start = (smoothstep(0.2 + h, 0.2, 0.6) - smoothstep(0.2 - h, 0.2, 0.6)) / (2.0 * h);
        let slope_end = (smoothstep(0.6 + h, 0.2, 0.6) - smoothstep(0.6 - h, 0.2, 0.6)) / (2.0 * h);
        assert!(slope_start.abs() < 1e-4, "slope at start: {}", slope_start);
        assert!(slope_end.abs() < 1e-4, "slope at end: {}", slope_end);
    }

    #[test]
    fn test_smoothstep_monotonic() {
        let mut previous = 0.0;
        for i in 0..=100 {
            let value = smoothstep(i as f64 / 100.0, 0.1, 0.9);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_degenerate_window_is_step() {
        assert_eq!(smoothstep(0.49, 0.5, 0.5), 0.0);
        assert_eq!(smoothstep(0.5, 0.5, 0.5), 1.0);
        // Inverted window steps at `end`
        assert_eq!(smoothstep(0.3, 0.8, 0.4), 0.0);
        assert_eq!(smoothstep(0.4, 0.8, 0.4), 1.0);
        assert_eq!(smoothstep(0.9, 0.8, 0.4), 1.0);
    }

    #[test]
    fn test_powered_smoothstep() {
        let base = smoothstep(0.4, 0.0, 1.0);
        assert_abs_diff_eq!(powered_smoothstep(0.4, 0.0, 1.0, 2.0), base * base, epsilon = 1e-12);
        assert_eq!(powered_smoothstep(1.0, 0.0, 1.0, 3.0), 1.0);
        assert_eq!(powered_smoothstep(0.0, 0.0, 1.0, 0.5), 0.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, 0.25), 2.5);
    }

    #[test]
    fn test_smooth_lerp_holds_outside_window() {
        assert_eq!(smooth_lerp(12.7, 80.0, 0.1, 0.2, 0.9, 1.5), 12.7);
        assert_abs_diff_eq!(smooth_lerp(12.7, 80.0, 0.95, 0.2, 0.9, 1.5), 80.0, epsilon = 1e-12);
    }
}
