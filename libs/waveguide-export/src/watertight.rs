//! # Watertightness Check
//!
//! Edge-use census over decoded STL triangles. Vertices are matched by
//! their exact `f32` bit patterns, which is how a slicer welds them.
//!
//! A closed, consistently oriented surface uses every directed edge once
//! and its reverse once.

use std::collections::HashMap;

use crate::stl::StlTriangle;

type VertexKey = [u32; 3];

/// Edge statistics of a triangle soup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WatertightReport {
    /// Triangles examined.
    pub triangles: usize,
    /// Distinct undirected edges.
    pub edges: usize,
    /// Edges used by exactly one triangle.
    pub boundary_edges: usize,
    /// Edges used by more than two triangles.
    pub non_manifold_edges: usize,
    /// Two-triangle edges traversed in the same direction by both.
    pub orientation_conflicts: usize,
    /// Triangles with two or more coincident corners.
    pub degenerate_triangles: usize,
}

impl WatertightReport {
    /// True when the surface is closed, manifold and consistently wound.
    pub fn is_watertight(&self) -> bool {
        self.boundary_edges == 0
            && self.non_manifold_edges == 0
            && self.orientation_conflicts == 0
            && self.degenerate_triangles == 0
    }
}

/// Counts edge uses over `triangles`.
pub fn watertight_report(triangles: &[StlTriangle]) -> WatertightReport {
    // (lower, upper) -> (uses lower→upper, uses upper→lower)
    let mut edges: HashMap<(VertexKey, VertexKey), (usize, usize)> = HashMap::new();
    let mut report = WatertightReport {
        triangles: triangles.len(),
        ..Default::default()
    };

    for triangle in triangles {
        let keys = triangle.vertices.map(vertex_key);
        if keys[0] == keys[1] || keys[1] == keys[2] || keys[0] == keys[2] {
            report.degenerate_triangles += 1;
            continue;
        }
        for i in 0..3 {
            let from = keys[i];
            let to = keys[(i + 1) % 3];
            if from < to {
                edges.entry((from, to)).or_default().0 += 1;
            } else {
                edges.entry((to, from)).or_default().1 += 1;
            }
        }
    }

    report.edges = edges.len();
    for (forward, backward) in edges.into_values() {
        match forward + backward {
            1 => report.boundary_edges += 1,
            2 if forward != 1 => report.orientation_conflicts += 1,
            2 => {}
            _ => report.non_manifold_edges += 1,
        }
    }

    log::debug!("Watertight check: {:?}", report);
    report
}

/// Bit pattern of a vertex with `-0.0` folded into `0.0`.
fn vertex_key(v: [f32; 3]) -> VertexKey {
    v.map(|c| if c == 0.0 { 0 } else { c.to_bits() })
}
