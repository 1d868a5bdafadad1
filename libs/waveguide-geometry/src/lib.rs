//! # Waveguide Geometry
//!
//! Parametric surface generation for R-OSSE acoustic waveguides.
//! Turns a [`WaveguideParams`] set into a ring × slice horn surface and,
//! optionally, an outward-offset shell.
//!
//! ## Architecture
//!
//! ```text
//! profile ───────────────┐
//! blend ─→ cross_section ─┴→ mesh ─→ shell
//! blend ─→ modulation ────┘
//! ```
//!
//! Every stage is a pure function of its inputs. Nothing is cached between
//! passes; any parameter change means a full recomputation.
//!
//! ## Usage
//!
//! ```rust
//! use waveguide_geometry::{generate_mesh, MeshMetrics, WaveguideParams};
//!
//! let mesh = generate_mesh(&WaveguideParams::default()).unwrap();
//! let metrics = MeshMetrics::from_mesh(&mesh);
//!
//! assert_eq!(mesh.ring_count(), 51);
//! assert!((metrics.mouth_width - 290.0).abs() < 1e-9);
//! ```

pub mod blend;
pub mod cross_section;
pub mod error;
pub mod mesh;
pub mod metrics;
pub mod modulation;
pub mod params;
pub mod profile;
pub mod shell;

pub use cross_section::{CrossSection, ShapeBlendParams};
pub use error::{Axis, GeometryError, GeometryResult};
pub use mesh::{assemble_mesh, generate_mesh, MeshData, MeshRing};
pub use metrics::MeshMetrics;
pub use modulation::{ModulationBlendParams, ModulationField, ModulationParams, PatternKind};
pub use params::WaveguideParams;
pub use profile::{CurveLookup, ProfileCurve, ProfileParams, ProfileSample};
pub use shell::{build_shell, ShellMeshData, ShellParams};

/// Validates `params` strictly, then generates the mesh and, when
/// requested, its shell.
///
/// Unlike [`generate_mesh`], empty blend windows are rejected up front.
pub fn generate(params: &WaveguideParams) -> GeometryResult<(MeshData, Option<ShellMeshData>)> {
    params.validate()?;
    let mesh = generate_mesh(params)?;
    let shell = build_shell(&mesh, &params.shell)?;
    Ok((mesh, shell))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_reference_without_shell() {
        let (mesh, shell) = generate(&WaveguideParams::default()).unwrap();
        assert_eq!(mesh.ring_count(), 51);
        assert!(shell.is_none());
    }

    #[test]
    fn test_generate_with_shell() {
        let mut params = WaveguideParams::default();
        params.shell.enabled = true;
        let (mesh, shell) = generate(&params).unwrap();
        let shell = shell.unwrap();
        assert_eq!(shell.inner(), &mesh);
        assert_eq!(shell.thickness(), 3.0);
    }

    #[test]
    fn test_generate_rejects_empty_window() {
        let mut params = WaveguideParams::default();
        params.shape.shape_start = 1.0;
        assert!(matches!(
            generate(&params),
            Err(GeometryError::InvalidBlendWindow { .. })
        ));
        // The lenient path still produces a mesh
        assert!(generate_mesh(&params).is_ok());
    }
}
