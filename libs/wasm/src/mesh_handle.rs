//! # Mesh Handle
//!
//! WASM-friendly wrapper for the horn surface that can be transferred to
//! JavaScript.

use waveguide_geometry::shell::vertex_normals;
use waveguide_geometry::{MeshData, MeshMetrics};
use wasm_bindgen::prelude::*;

/// Indexed render buffers for the inner horn surface plus its metrics.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = generate_mesh(JSON.stringify({ rings: 50, slices: 72 }));
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
///
/// console.log(`${mesh.mouth_width} × ${mesh.mouth_height} mm`);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Vertex normals facing the acoustic path, [nx, ny, nz, ...]
    normals: Vec<f32>,
    ring_count: u32,
    slices: u32,
    metrics: MeshMetrics,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices, seam duplicates included.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        (self.vertices.len() / 3) as u32
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        (self.indices.len() / 3) as u32
    }

    /// Returns the number of rings (`rings + 1`).
    #[wasm_bindgen(getter)]
    pub fn ring_count(&self) -> u32 {
        self.ring_count
    }

    /// Returns the number of angular slices.
    #[wasm_bindgen(getter)]
    pub fn slices(&self) -> u32 {
        self.slices
    }

    /// Returns the vertex buffer as a Float32Array.
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the index buffer as a Uint32Array.
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns the normal buffer as a Float32Array.
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Throat radius in mm.
    #[wasm_bindgen(getter)]
    pub fn throat_radius(&self) -> f64 {
        self.metrics.throat_radius
    }

    /// Axial depth of the mouth ring in mm.
    #[wasm_bindgen(getter)]
    pub fn axial_depth(&self) -> f64 {
        self.metrics.axial_depth
    }

    /// Largest axial position of any ring in mm.
    #[wasm_bindgen(getter)]
    pub fn peak_depth(&self) -> f64 {
        self.metrics.peak_depth
    }

    /// Mouth width in mm.
    #[wasm_bindgen(getter)]
    pub fn mouth_width(&self) -> f64 {
        self.metrics.mouth_width
    }

    /// Mouth height in mm.
    #[wasm_bindgen(getter)]
    pub fn mouth_height(&self) -> f64 {
        self.metrics.mouth_height
    }
}

impl MeshHandle {
    /// Flattens `mesh` into indexed buffers with inward winding.
    pub fn from_mesh(mesh: &MeshData) -> Self {
        let stride = mesh.slices() + 1;

        let vertices: Vec<f32> = mesh
            .rings()
            .iter()
            .flat_map(|ring| ring.points.iter())
            .flat_map(|p| p.as_vec3().to_array())
            .collect();

        // Render normals face the listener, opposite to the offset normals
        let normals: Vec<f32> = vertex_normals(mesh)
            .into_iter()
            .flat_map(|n| (-n).as_vec3().to_array())
            .collect();

        let mut indices = Vec::with_capacity(6 * mesh.ring_intervals() * mesh.slices());
        for ri in 0..mesh.ring_intervals() {
            for si in 0..mesh.slices() {
                let a = (ri * stride + si) as u32;
                let b = a + 1;
                let c = a + stride as u32;
                let d = c + 1;
                indices.extend_from_slice(&[a, d, b, a, c, d]);
            }
        }

        Self {
            vertices,
            indices,
            normals,
            ring_count: mesh.ring_count() as u32,
            slices: mesh.slices() as u32,
            metrics: MeshMetrics::from_mesh(mesh),
        }
    }

    /// Metrics of the wrapped mesh.
    pub fn metrics(&self) -> &MeshMetrics {
        &self.metrics
    }
}
