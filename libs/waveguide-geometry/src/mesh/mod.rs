//! # Mesh Data Structure
//!
//! Ring × slice grid of the horn surface, throat first.
//!
//! ## Layout
//!
//! ```text
//! ring 0 (t = 0, throat)   P[0][0] … P[0][slices]      P[0][slices] == P[0][0]
//! ring 1                   P[1][0] … P[1][slices]
//! …
//! ring R (t = 1, mouth)    P[R][0] … P[R][slices]
//! ```
//!
//! Points are `(x, y, z)` with the cross-section in the XY plane, the slice
//! angle increasing counter-clockwise about +Z, and `z` the axial position
//! taken from the horizontal profile.

use std::f64::consts::TAU;

use config::constants::PARALLEL_VERTEX_THRESHOLD;
use glam::DVec3;
use rayon::prelude::*;
use serde::Serialize;

use crate::cross_section::CrossSection;
use crate::error::{Axis, GeometryError, GeometryResult};
use crate::modulation::ModulationField;
use crate::params::{validate_resolution, WaveguideParams};
use crate::profile::ProfileCurve;

/// One cross-section of the mesh at a fixed `t`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshRing {
    /// Station parameter in `[0, 1]`.
    pub t: f64,
    /// Axial position.
    pub x_h: f64,
    /// Blended half-width before modulation.
    pub y_h: f64,
    /// Blended half-height before modulation.
    pub y_v: f64,
    /// Superellipse exponent.
    pub n: f64,
    /// Closed polyline of `slices + 1` points; the last repeats the first.
    pub points: Vec<DVec3>,
}

/// The canonical in-memory horn surface.
///
/// Always holds `rings + 1` rings of `slices + 1` points each, with every
/// ring's seam closed exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshData {
    rings: Vec<MeshRing>,
    slices: usize,
}

impl MeshData {
    /// Wraps pre-built rings after checking the grid invariants.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidResolution`] when fewer than two rings are
    /// given, and [`GeometryError::InvalidParameter`] when a ring has the
    /// wrong point count, a non-finite point or an open seam.
    pub fn from_rings(rings: Vec<MeshRing>, slices: usize) -> GeometryResult<Self> {
        if rings.len() < 2 || slices < 3 {
            return Err(GeometryError::InvalidResolution {
                rings: rings.len().saturating_sub(1),
                slices,
            });
        }
        for (index, ring) in rings.iter().enumerate() {
            if ring.points.len() != slices + 1 {
                return Err(GeometryError::invalid_parameter(
                    format!("rings[{}]", index),
                    format!("expected {} points, got {}", slices + 1, ring.points.len()),
                ));
            }
            if let Some(slice) = ring.points.iter().position(|p| !p.is_finite()) {
                return Err(GeometryError::invalid_parameter(
                    format!("rings[{}]", index),
                    format!("point {} is not finite", slice),
                ));
            }
            if ring.points[0] != ring.points[slices] {
                return Err(GeometryError::invalid_parameter(
                    format!("rings[{}]", index),
                    "seam is not closed",
                ));
            }
        }
        Ok(Self { rings, slices })
    }

    /// Returns the rings, throat first.
    #[inline]
    pub fn rings(&self) -> &[MeshRing] {
        &self.rings
    }

    /// Number of rings (`rings + 1`).
    #[inline]
    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// Number of ring intervals between throat and mouth.
    #[inline]
    pub fn ring_intervals(&self) -> usize {
        self.rings.len() - 1
    }

    /// Number of angular slices.
    #[inline]
    pub fn slices(&self) -> usize {
        self.slices
    }

    /// Throat ring.
    #[inline]
    pub fn throat(&self) -> &MeshRing {
        &self.rings[0]
    }

    /// Mouth ring.
    #[inline]
    pub fn mouth(&self) -> &MeshRing {
        &self.rings[self.rings.len() - 1]
    }

    /// Point at `(ring, slice)`.
    #[inline]
    pub fn vertex(&self, ring: usize, slice: usize) -> DVec3 {
        self.rings[ring].points[slice]
    }

    /// Total stored points, seam duplicates included.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.rings.len() * (self.slices + 1)
    }

    /// Quad corners `[a, b, c, d]` between rings `ring`/`ring + 1` and
    /// slices `slice`/`slice + 1`:
    ///
    /// ```text
    /// c = P[r+1][s] ── d = P[r+1][s+1]
    ///       │                 │
    /// a = P[r][s]   ── b = P[r][s+1]
    /// ```
    #[inline]
    pub fn quad(&self, ring: usize, slice: usize) -> [DVec3; 4] {
        let lower = &self.rings[ring].points;
        let upper = &self.rings[ring + 1].points;
        [lower[slice], lower[slice + 1], upper[slice], upper[slice + 1]]
    }

    /// True when every ring's first and last points are identical.
    pub fn is_seam_closed(&self) -> bool {
        self.rings
            .iter()
            .all(|ring| ring.points[0] == ring.points[self.slices])
    }

    /// Axis-aligned bounding box `(min, max)`.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        self.rings
            .iter()
            .flat_map(|ring| ring.points.iter())
            .fold(
                (DVec3::splat(f64::INFINITY), DVec3::splat(f64::NEG_INFINITY)),
                |(min, max), p| (min.min(*p), max.max(*p)),
            )
    }
}

/// Runs a full computation pass: solves both profiles, samples the
/// modulation means and assembles the grid.
///
/// Blend windows are not checked here; an empty window degrades to a step.
/// Call [`WaveguideParams::validate`] first for strict intake checking.
///
/// # Errors
///
/// The first failure among profile solving, modulation setup and
/// resolution checks. No partial mesh is produced.
pub fn generate_mesh(params: &WaveguideParams) -> GeometryResult<MeshData> {
    let horizontal = ProfileCurve::solve(&params.horizontal, Axis::Horizontal, params.profile_samples)?;
    let vertical = ProfileCurve::solve(&params.vertical, Axis::Vertical, params.profile_samples)?;
    let modulation = ModulationField::new(
        params.diagonal,
        params.cardinal,
        params.modulation_blend,
        params.modulation_samples,
    )?;
    assemble_mesh(&horizontal, &vertical, &modulation, params)
}

/// Assembles the ring × slice grid from solved profiles.
///
/// Rings are independent; large grids are evaluated across the rayon pool
/// and collected in order, producing the same result as the serial path.
///
/// # Errors
///
/// [`GeometryError::InvalidResolution`] when the ring or slice count is
/// outside the supported range, and [`GeometryError::InvalidParameter`]
/// for a mouth exponent below 2 or a non-positive shape power.
pub fn assemble_mesh(
    horizontal: &ProfileCurve,
    vertical: &ProfileCurve,
    modulation: &ModulationField,
    params: &WaveguideParams,
) -> GeometryResult<MeshData> {
    let rings = params.rings;
    let slices = params.slices;
    validate_resolution(rings, slices)?;
    params.shape.validate_exponents()?;

    if params.shape.shape_start >= params.shape.shape_end {
        log::warn!(
            "Shape window [{}, {}] is empty; the throat-to-mouth transition becomes a step",
            params.shape.shape_start,
            params.shape.shape_end
        );
    }
    if !modulation.is_identity()
        && params.modulation_blend.mod_start >= params.modulation_blend.mod_end
    {
        log::warn!(
            "Modulation window [{}, {}] is empty; modulation switches on abruptly",
            params.modulation_blend.mod_start,
            params.modulation_blend.mod_end
        );
    }

    let build = |ri: usize| build_ring(ri, horizontal, vertical, modulation, params);
    let vertex_count = (rings + 1) * (slices + 1);
    let ring_data: Vec<MeshRing> = if vertex_count > PARALLEL_VERTEX_THRESHOLD {
        (0..=rings).into_par_iter().map(build).collect()
    } else {
        (0..=rings).map(build).collect()
    };

    log::debug!(
        "Assembled mesh: {} rings × {} points",
        ring_data.len(),
        slices + 1
    );

    MeshData::from_rings(ring_data, slices)
}

fn build_ring(
    ri: usize,
    horizontal: &ProfileCurve,
    vertical: &ProfileCurve,
    modulation: &ModulationField,
    params: &WaveguideParams,
) -> MeshRing {
    let slices = params.slices;
    let t = ri as f64 / params.rings as f64;
    let section = CrossSection::at(
        t,
        horizontal,
        vertical,
        params.horizontal.throat_radius,
        params.vertical.throat_radius,
        &params.shape,
        params.lookup,
    );

    let mut points = Vec::with_capacity(slices + 1);
    for si in 0..slices {
        let theta = TAU * si as f64 / slices as f64;
        let p = section.point(theta) * modulation.multiplier(theta, t);
        points.push(DVec3::new(p.x, p.y, section.x_h));
    }
    // Exact seam: sin(2π) is not exactly zero, so the closing point is copied
    points.push(points[0]);

    MeshRing {
        t,
        x_h: section.x_h,
        y_h: section.y_h,
        y_v: section.y_v,
        n: section.n,
        points,
    }
}
