//! End-to-end export checks: parameters in, decoded STL out.

use waveguide_export::{
    count_triangles, decode_stl, export_params, export_stl, export_stl_to, watertight_report,
    ExportError,
};
use waveguide_geometry::{generate_mesh, GeometryError, ModulationParams, ShellParams, WaveguideParams};

fn shelled(throat_cap: bool, mouth_cap: bool) -> ShellParams {
    ShellParams {
        enabled: true,
        thickness: 3.0,
        throat_cap,
        mouth_cap,
    }
}

#[test]
fn byte_length_follows_count_law() {
    for (rings, slices) in [(1, 3), (10, 16), (50, 72)] {
        let params = WaveguideParams {
            rings,
            slices,
            ..Default::default()
        };
        let mesh = generate_mesh(&params).unwrap();
        for shell in [ShellParams::default(), shelled(true, true), shelled(false, true)] {
            let bytes = export_stl(&mesh, &shell, "test").unwrap();
            let count = count_triangles(rings, slices, &shell);
            assert_eq!(bytes.len(), 80 + 4 + 50 * count);
            assert_eq!(&bytes[80..84], &(count as u32).to_le_bytes());
        }
    }
}

#[test]
fn reference_counts() {
    let mesh = generate_mesh(&WaveguideParams::default()).unwrap();
    let surface = decode_stl(&export_stl(&mesh, &ShellParams::default(), "").unwrap()).unwrap();
    assert_eq!(surface.triangles.len(), 7200);
    let shell = decode_stl(&export_stl(&mesh, &shelled(true, true), "").unwrap()).unwrap();
    assert_eq!(shell.triangles.len(), 14688);
}

#[test]
fn capped_shell_is_watertight() {
    let mesh = generate_mesh(&WaveguideParams::default()).unwrap();
    let bytes = export_stl(&mesh, &shelled(true, true), "").unwrap();
    let report = watertight_report(&decode_stl(&bytes).unwrap().triangles);
    assert!(report.is_watertight(), "{:?}", report);
    assert_eq!(report.triangles, 14688);
}

#[test]
fn modulated_shell_is_watertight() {
    let mut params = WaveguideParams::default();
    params.diagonal = ModulationParams {
        enabled: true,
        base: 0.6,
        amp: 0.4,
        freq: 4.0,
        exp: 2.0,
    };
    params.cardinal.enabled = true;
    params.slices = 41;
    params.rings = 23;
    params.shell = shelled(true, true);
    let report = watertight_report(&decode_stl(&export_params(&params).unwrap()).unwrap().triangles);
    assert!(report.is_watertight(), "{:?}", report);
}

#[test]
fn open_ends_leave_boundaries() {
    let mesh = generate_mesh(&WaveguideParams::default()).unwrap();

    let surface = decode_stl(&export_stl(&mesh, &ShellParams::default(), "").unwrap()).unwrap();
    let report = watertight_report(&surface.triangles);
    // Throat and mouth rings of the single surface
    assert_eq!(report.boundary_edges, 2 * 72);
    assert_eq!(report.orientation_conflicts, 0);

    let one_cap = decode_stl(&export_stl(&mesh, &shelled(true, false), "").unwrap()).unwrap();
    let report = watertight_report(&one_cap.triangles);
    // Inner and outer mouth rings
    assert_eq!(report.boundary_edges, 2 * 72);
    assert_eq!(report.orientation_conflicts, 0);
}

#[test]
fn streamed_output_matches_buffer() {
    let mesh = generate_mesh(&WaveguideParams::default()).unwrap();
    let shell = shelled(true, true);
    let mut sink = Vec::new();
    export_stl_to(&mut sink, &mesh, &shell, "stream").unwrap();
    assert_eq!(sink, export_stl(&mesh, &shell, "stream").unwrap());
}

#[test]
fn unsolvable_profile_is_reported() {
    let mut params = WaveguideParams::default();
    params.horizontal.outer_radius = 5.0;
    params.horizontal.throat_angle = 0.0;
    params.horizontal.coverage_angle = 60.0;
    params.horizontal.expansion = 1.0;
    let err = export_params(&params).unwrap_err();
    assert!(matches!(
        err,
        ExportError::Geometry(GeometryError::UnsolvableProfile { .. })
    ));
}

#[test]
fn invalid_thickness_is_rejected() {
    let mesh = generate_mesh(&WaveguideParams::default()).unwrap();
    let shell = ShellParams {
        enabled: true,
        thickness: 0.0,
        ..Default::default()
    };
    assert!(matches!(
        export_stl(&mesh, &shell, ""),
        Err(ExportError::Geometry(GeometryError::InvalidParameter { .. }))
    ));
}
