//! # Triangulation Tests

use super::*;
use waveguide_geometry::{generate_mesh, WaveguideParams};

fn reference_mesh() -> MeshData {
    generate_mesh(&WaveguideParams::default()).unwrap()
}

fn shell_params(throat_cap: bool, mouth_cap: bool) -> ShellParams {
    ShellParams {
        enabled: true,
        thickness: 3.0,
        throat_cap,
        mouth_cap,
    }
}

#[test]
fn test_count_law() {
    assert_eq!(count_triangles(50, 72, &ShellParams::default()), 7200);
    assert_eq!(count_triangles(50, 72, &shell_params(true, true)), 4 * 50 * 72 + 4 * 72);
    assert_eq!(count_triangles(50, 72, &shell_params(true, false)), 4 * 50 * 72 + 2 * 72);
    assert_eq!(count_triangles(50, 72, &shell_params(false, false)), 4 * 50 * 72);
    assert_eq!(count_triangles(1, 3, &ShellParams::default()), 6);
}

#[test]
fn test_surface_triangle_count() {
    let mesh = reference_mesh();
    assert_eq!(triangulate_surface(&mesh).len(), 7200);
}

#[test]
fn test_shell_triangle_counts() {
    let mesh = reference_mesh();
    let shell = ShellMeshData::build(&mesh, 3.0).unwrap();
    for (throat, mouth) in [(true, true), (true, false), (false, true), (false, false)] {
        let triangles = triangulate_shell(&shell, throat, mouth);
        assert_eq!(triangles.len(), count_triangles(50, 72, &shell_params(throat, mouth)));
    }
}

#[test]
fn test_inner_surface_faces_axis() {
    let mesh = reference_mesh();
    let triangles = triangulate_surface(&mesh);
    // Ring interval 20 occupies triangles [20·144, 21·144)
    for triangle in &triangles[20 * 144..21 * 144] {
        let centroid = (triangle.vertices[0] + triangle.vertices[1] + triangle.vertices[2]) / 3.0;
        assert!(triangle.normal().truncate().dot(centroid.truncate()) < 0.0);
    }
}

#[test]
fn test_outer_surface_faces_away() {
    let mesh = reference_mesh();
    let shell = ShellMeshData::build(&mesh, 3.0).unwrap();
    let triangles = triangulate_shell(&shell, false, false);
    let outer = &triangles[7200..];
    for triangle in &outer[20 * 144..21 * 144] {
        let centroid = (triangle.vertices[0] + triangle.vertices[1] + triangle.vertices[2]) / 3.0;
        assert!(triangle.normal().truncate().dot(centroid.truncate()) > 0.0);
    }
}

#[test]
fn test_shell_surfaces_share_inner_layout() {
    let mesh = reference_mesh();
    let shell = ShellMeshData::build(&mesh, 3.0).unwrap();
    let surface = triangulate_surface(&mesh);
    let shelled = triangulate_shell(&shell, true, true);
    assert_eq!(&shelled[..surface.len()], &surface[..]);
}

#[test]
fn test_normal_of_unit_triangle() {
    let t = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y);
    assert_eq!(t.normal(), DVec3::Z);
    let flipped = Triangle::new(DVec3::ZERO, DVec3::Y, DVec3::X);
    assert_eq!(flipped.normal(), DVec3::NEG_Z);
}

#[test]
fn test_degenerate_normal_falls_back() {
    let p = DVec3::new(1.0, 2.0, 3.0);
    assert_eq!(Triangle::new(p, p, p).normal(), DVec3::Z);
    // Collinear corners
    let t = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::X * 2.0);
    assert_eq!(t.normal(), DVec3::Z);
}
