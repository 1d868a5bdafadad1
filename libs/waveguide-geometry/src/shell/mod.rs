//! # Shell Generator
//!
//! Gives the horn surface a wall. The inner surface is the assembled mesh
//! itself; the outer surface is every inner vertex pushed outward along
//! its vertex normal by the wall thickness.
//!
//! ## Vertex Normals
//!
//! Each quad contributes one unit face normal, `(b − a) × (c − a)`, to all
//! four of its corners. The two seam copies of a vertex (slice 0 and slice
//! `slices`) see different quads, so their sums are merged before the
//! final normalization. Degenerate faces contribute nothing, and sums
//! shorter than `EPSILON` fall back to +Z.

use config::constants::{approx_zero, DEFAULT_NORMAL, DEFAULT_SHELL_THICKNESS};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};
use crate::mesh::MeshData;

/// Wall thickness and end-cap options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellParams {
    /// Whether an outer wall is generated at all.
    pub enabled: bool,
    /// Wall thickness in mm.
    pub thickness: f64,
    /// Close the gap between inner and outer surface at the throat.
    pub throat_cap: bool,
    /// Close the gap between inner and outer surface at the mouth.
    pub mouth_cap: bool,
}

impl Default for ShellParams {
    fn default() -> Self {
        Self {
            enabled: false,
            thickness: DEFAULT_SHELL_THICKNESS,
            throat_cap: true,
            mouth_cap: true,
        }
    }
}

impl ShellParams {
    /// Checks the thickness. A disabled shell is always valid.
    pub fn validate(&self) -> GeometryResult<()> {
        if self.enabled && (!self.thickness.is_finite() || self.thickness <= 0.0) {
            return Err(GeometryError::invalid_parameter(
                "shell.thickness",
                format!("must be positive, got {}", self.thickness),
            ));
        }
        Ok(())
    }
}

/// A horn surface with its outward-offset wall.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellMeshData {
    inner: MeshData,
    outer: Vec<DVec3>,
    normals: Vec<DVec3>,
    thickness: f64,
}

impl ShellMeshData {
    /// Offsets `mesh` outward by `thickness`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidParameter`] when `thickness` is not a
    /// positive finite number.
    pub fn build(mesh: &MeshData, thickness: f64) -> GeometryResult<Self> {
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(GeometryError::invalid_parameter(
                "shell.thickness",
                format!("must be positive, got {}", thickness),
            ));
        }

        let slices = mesh.slices();
        let stride = slices + 1;
        let normals = vertex_normals(mesh);

        let mut outer = Vec::with_capacity(normals.len());
        for (ri, ring) in mesh.rings().iter().enumerate() {
            let base = ri * stride;
            for (si, p) in ring.points.iter().enumerate() {
                outer.push(*p + thickness * normals[base + si]);
            }
            outer[base + slices] = outer[base];
        }

        log::debug!(
            "Built shell: {} outer vertices at {:.2} mm",
            outer.len(),
            thickness
        );

        Ok(Self {
            inner: mesh.clone(),
            outer,
            normals,
            thickness,
        })
    }

    /// The unmodified acoustic surface.
    #[inline]
    pub fn inner(&self) -> &MeshData {
        &self.inner
    }

    /// Wall thickness used for the offset.
    #[inline]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Number of rings (`rings + 1`).
    #[inline]
    pub fn ring_count(&self) -> usize {
        self.inner.ring_count()
    }

    /// Number of angular slices.
    #[inline]
    pub fn slices(&self) -> usize {
        self.inner.slices()
    }

    /// Outer polyline of ring `ring`, `slices + 1` points.
    #[inline]
    pub fn outer_ring(&self, ring: usize) -> &[DVec3] {
        let stride = self.slices() + 1;
        &self.outer[ring * stride..(ring + 1) * stride]
    }

    /// Outer point at `(ring, slice)`.
    #[inline]
    pub fn outer_vertex(&self, ring: usize, slice: usize) -> DVec3 {
        self.outer[ring * (self.slices() + 1) + slice]
    }

    /// Unit vertex normal at `(ring, slice)`.
    #[inline]
    pub fn normal(&self, ring: usize, slice: usize) -> DVec3 {
        self.normals[ring * (self.slices() + 1) + slice]
    }

    /// Outer quad corners `[a, b, c, d]`, laid out like [`MeshData::quad`].
    #[inline]
    pub fn outer_quad(&self, ring: usize, slice: usize) -> [DVec3; 4] {
        let lower = self.outer_ring(ring);
        let upper = self.outer_ring(ring + 1);
        [lower[slice], lower[slice + 1], upper[slice], upper[slice + 1]]
    }

    /// True when every outer ring's seam is closed exactly.
    pub fn is_seam_closed(&self) -> bool {
        let slices = self.slices();
        (0..self.ring_count()).all(|r| {
            let ring = self.outer_ring(r);
            ring[0] == ring[slices]
        })
    }
}

/// Builds the shell when `params` ask for one.
///
/// Returns `Ok(None)` for a disabled shell.
pub fn build_shell(mesh: &MeshData, params: &ShellParams) -> GeometryResult<Option<ShellMeshData>> {
    if !params.enabled {
        return Ok(None);
    }
    ShellMeshData::build(mesh, params.thickness).map(Some)
}

/// Unit vertex normals in a flat `(rings + 1) × (slices + 1)` arena.
pub fn vertex_normals(mesh: &MeshData) -> Vec<DVec3> {
    let slices = mesh.slices();
    let stride = slices + 1;
    let mut sums = vec![DVec3::ZERO; mesh.vertex_count()];

    for ri in 0..mesh.ring_intervals() {
        for si in 0..slices {
            let [a, b, c, _] = mesh.quad(ri, si);
            let cross = (b - a).cross(c - a);
            let length = cross.length();
            if approx_zero(length) {
                continue;
            }
            let face = cross / length;
            let lower = ri * stride + si;
            let upper = lower + stride;
            sums[lower] += face;
            sums[lower + 1] += face;
            sums[upper] += face;
            sums[upper + 1] += face;
        }
    }

    // Merge the seam copies
    for ri in 0..mesh.ring_count() {
        let first = ri * stride;
        let last = first + slices;
        let merged = sums[first] + sums[last];
        sums[first] = merged;
        sums[last] = merged;
    }

    let fallback = DVec3::from_array(DEFAULT_NORMAL);
    sums.into_iter()
        .map(|n| {
            let length = n.length();
            if approx_zero(length) {
                fallback
            } else {
                n / length
            }
        })
        .collect()
}
