//! # Triangulation
//!
//! Splits every grid quad into two triangles along the `a → d` diagonal
//! and closes a shelled horn at its ends.
//!
//! ## Winding
//!
//! With quad corners laid out as in [`MeshData::quad`]:
//!
//! ```text
//! inner surface   (a, d, b) (a, c, d)    faces the acoustic path
//! outer surface   (a, b, d) (a, d, c)    faces away from it
//! ```
//!
//! The throat and mouth strips join inner ring `I` to outer ring `O` with
//! the opposite traversal of each shared edge, so a fully capped shell is
//! watertight.

use config::constants::{approx_zero, DEFAULT_NORMAL};
use glam::DVec3;
use waveguide_geometry::{MeshData, ShellMeshData, ShellParams};

/// One output triangle in double precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Corners in counter-clockwise order seen from the front face.
    pub vertices: [DVec3; 3],
}

impl Triangle {
    /// Creates a triangle from its corners.
    #[inline]
    pub fn new(a: DVec3, b: DVec3, c: DVec3) -> Self {
        Self { vertices: [a, b, c] }
    }

    /// Unit face normal, or +Z for a degenerate triangle.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        let [a, b, c] = self.vertices;
        let cross = (b - a).cross(c - a);
        let length = cross.length();
        if approx_zero(length) {
            DVec3::from_array(DEFAULT_NORMAL)
        } else {
            cross / length
        }
    }
}

/// Number of triangles an export of a `rings × slices` grid produces.
///
/// `2·rings·slices` for a bare surface; a shell doubles that and adds
/// `2·slices` for each enabled cap.
pub fn count_triangles(rings: usize, slices: usize, shell: &ShellParams) -> usize {
    let surface = 2 * rings * slices;
    if !shell.enabled {
        return surface;
    }
    let caps = usize::from(shell.throat_cap) + usize::from(shell.mouth_cap);
    2 * surface + 2 * slices * caps
}

/// Triangulates the bare horn surface with inward-facing winding.
pub fn triangulate_surface(mesh: &MeshData) -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(2 * mesh.ring_intervals() * mesh.slices());
    push_inner(&mut triangles, mesh);
    triangles
}

/// Triangulates a shell: inner and outer surfaces plus the requested caps.
pub fn triangulate_shell(shell: &ShellMeshData, throat_cap: bool, mouth_cap: bool) -> Vec<Triangle> {
    let inner = shell.inner();
    let params = ShellParams {
        enabled: true,
        thickness: shell.thickness(),
        throat_cap,
        mouth_cap,
    };
    let mut triangles = Vec::with_capacity(count_triangles(
        inner.ring_intervals(),
        inner.slices(),
        &params,
    ));

    push_inner(&mut triangles, inner);
    for ri in 0..inner.ring_intervals() {
        for si in 0..inner.slices() {
            let [a, b, c, d] = shell.outer_quad(ri, si);
            triangles.push(Triangle::new(a, b, d));
            triangles.push(Triangle::new(a, d, c));
        }
    }
    if throat_cap {
        push_throat_strip(&mut triangles, shell);
    }
    if mouth_cap {
        push_mouth_strip(&mut triangles, shell);
    }
    triangles
}

fn push_inner(triangles: &mut Vec<Triangle>, mesh: &MeshData) {
    for ri in 0..mesh.ring_intervals() {
        for si in 0..mesh.slices() {
            let [a, b, c, d] = mesh.quad(ri, si);
            triangles.push(Triangle::new(a, d, b));
            triangles.push(Triangle::new(a, c, d));
        }
    }
}

fn push_throat_strip(triangles: &mut Vec<Triangle>, shell: &ShellMeshData) {
    let inner = &shell.inner().throat().points;
    let outer = shell.outer_ring(0);
    for s in 0..shell.slices() {
        triangles.push(Triangle::new(inner[s], inner[s + 1], outer[s]));
        triangles.push(Triangle::new(inner[s + 1], outer[s + 1], outer[s]));
    }
}

fn push_mouth_strip(triangles: &mut Vec<Triangle>, shell: &ShellMeshData) {
    let inner = &shell.inner().mouth().points;
    let outer = shell.outer_ring(shell.ring_count() - 1);
    for s in 0..shell.slices() {
        triangles.push(Triangle::new(inner[s], outer[s], inner[s + 1]));
        triangles.push(Triangle::new(inner[s + 1], outer[s], outer[s + 1]));
    }
}

#[cfg(test)]
mod tests;
