//! # Waveguide Export
//!
//! Binary STL output for waveguide surfaces produced by
//! `waveguide-geometry`.
//!
//! ## Architecture
//!
//! ```text
//! MeshData ─→ build_shell ─→ triangulate ─→ stl (encode/write)
//!                                              │
//!                              decode_stl ←────┘ ─→ watertight_report
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use waveguide_export::{decode_stl, export_stl};
//! use waveguide_geometry::{generate_mesh, ShellParams, WaveguideParams};
//!
//! let mesh = generate_mesh(&WaveguideParams::default()).unwrap();
//! let bytes = export_stl(&mesh, &ShellParams::default(), "horn").unwrap();
//!
//! // Bare surface: two triangles per quad
//! assert_eq!(decode_stl(&bytes).unwrap().triangles.len(), 2 * 50 * 72);
//! ```

pub mod error;
pub mod stl;
pub mod triangulate;
pub mod watertight;

use std::io::Write;

use config::constants::DEFAULT_STL_HEADER;
use waveguide_geometry::{build_shell, generate_mesh, MeshData, ShellParams, WaveguideParams};

pub use error::{ExportError, ExportResult};
pub use stl::{decode_stl, encode_stl, write_stl, StlMesh, StlTriangle};
pub use triangulate::{count_triangles, triangulate_shell, triangulate_surface, Triangle};
pub use watertight::{watertight_report, WatertightReport};

/// Triangulates `mesh`, shelled when `shell` asks for it.
///
/// # Errors
///
/// [`ExportError::Geometry`] for an invalid shell thickness and
/// [`ExportError::TriangleCountMismatch`] when the triangulation disagrees
/// with [`count_triangles`].
pub fn triangulate(mesh: &MeshData, shell: &ShellParams) -> ExportResult<Vec<Triangle>> {
    shell.validate()?;
    let triangles = match build_shell(mesh, shell)? {
        Some(shelled) => triangulate_shell(&shelled, shell.throat_cap, shell.mouth_cap),
        None => triangulate_surface(mesh),
    };

    let expected = count_triangles(mesh.ring_intervals(), mesh.slices(), shell);
    if triangles.len() != expected {
        return Err(ExportError::TriangleCountMismatch {
            expected,
            actual: triangles.len(),
        });
    }
    Ok(triangles)
}

/// Encodes `mesh` as a binary STL buffer.
pub fn export_stl(mesh: &MeshData, shell: &ShellParams, header: &str) -> ExportResult<Vec<u8>> {
    let triangles = triangulate(mesh, shell)?;
    let bytes = encode_stl(&triangles, header)?;
    log::info!(
        "Exported {} triangles ({} bytes, shell {})",
        triangles.len(),
        bytes.len(),
        if shell.enabled { "on" } else { "off" }
    );
    Ok(bytes)
}

/// Streams `mesh` as binary STL to `writer`.
pub fn export_stl_to<W: Write>(
    writer: &mut W,
    mesh: &MeshData,
    shell: &ShellParams,
    header: &str,
) -> ExportResult<()> {
    let triangles = triangulate(mesh, shell)?;
    write_stl(writer, &triangles, header)
}

/// Runs the whole pipeline from parameters to STL bytes, using the shell
/// settings carried in `params` and the default header.
pub fn export_params(params: &WaveguideParams) -> ExportResult<Vec<u8>> {
    let mesh = generate_mesh(params)?;
    export_stl(&mesh, &params.shell, DEFAULT_STL_HEADER)
}
