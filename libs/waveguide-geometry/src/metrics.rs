//! Headline dimensions of an assembled horn.

use serde::Serialize;

use crate::mesh::MeshData;

/// Summary values for an info display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshMetrics {
    /// Throat half-width (`rings[0].y_h`).
    pub throat_radius: f64,
    /// Axial position of the mouth ring.
    pub axial_depth: f64,
    /// Full mouth width (`2 · y_h` of the mouth ring).
    pub mouth_width: f64,
    /// Full mouth height (`2 · y_v` of the mouth ring).
    pub mouth_height: f64,
    /// Largest axial position over all rings. Exceeds `axial_depth` when
    /// the mouth rolls back towards the throat.
    pub peak_depth: f64,
}

impl MeshMetrics {
    /// Reads the metrics off `mesh`.
    pub fn from_mesh(mesh: &MeshData) -> Self {
        let throat = mesh.throat();
        let mouth = mesh.mouth();
        let peak_depth = mesh
            .rings()
            .iter()
            .map(|r| r.x_h)
            .fold(f64::NEG_INFINITY, f64::max);

        Self {
            throat_radius: throat.y_h,
            axial_depth: mouth.x_h,
            mouth_width: 2.0 * mouth.y_h,
            mouth_height: 2.0 * mouth.y_v,
            peak_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::generate_mesh;
    use crate::params::WaveguideParams;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_metrics() {
        let mesh = generate_mesh(&WaveguideParams::default()).unwrap();
        let metrics = MeshMetrics::from_mesh(&mesh);
        assert_abs_diff_eq!(metrics.throat_radius, 12.7, epsilon = 1e-9);
        assert_abs_diff_eq!(metrics.mouth_width, 290.0, epsilon = 1e-9);
        assert_abs_diff_eq!(metrics.mouth_height, 190.0, epsilon = 1e-9);
        assert_abs_diff_eq!(metrics.axial_depth, 52.022, epsilon = 1e-3);
        // The reference mouth rolls back by about 18 mm
        assert!(metrics.peak_depth > metrics.axial_depth + 15.0);
    }

    #[test]
    fn test_peak_equals_depth_without_roll_back() {
        let mut params = WaveguideParams::default();
        params.horizontal.bending = 0.0;
        params.horizontal.apex_shift = 1.0;
        let mesh = generate_mesh(&params).unwrap();
        let metrics = MeshMetrics::from_mesh(&mesh);
        assert_eq!(metrics.peak_depth, metrics.axial_depth);
    }

    #[test]
    fn test_serializes_camel_case() {
        let mesh = generate_mesh(&WaveguideParams::default()).unwrap();
        let value = serde_json::to_value(MeshMetrics::from_mesh(&mesh)).unwrap();
        assert!(value.get("mouthWidth").is_some());
        assert!(value.get("peakDepth").is_some());
    }
}
