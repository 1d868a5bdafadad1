//! WASM-facing entry points for the waveguide generator.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Parameters cross the boundary as JSON documents in the
//! camelCase form of [`WaveguideParams`]. Native tests use the `*_internal`
//! helpers, which return Rust error types instead of `JsValue`.
//!
//! ```
//! let mesh = waveguide_wasm::generate_mesh_internal("{}").unwrap();
//! assert_eq!(mesh.ring_count(), 51);
//! ```

mod error;
mod mesh_handle;

pub use error::ApiError;
pub use mesh_handle::MeshHandle;

use config::constants::DEFAULT_STL_HEADER;
use waveguide_export::export_stl;
use waveguide_geometry::{generate_mesh, MeshData, MeshMetrics, WaveguideParams};
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "waveguide_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the reference design as a JSON parameter document.
///
/// # Examples
/// ```
/// let json = waveguide_wasm::default_params_json();
/// assert!(json.contains("\"outerRadius\":145.0"));
/// ```
#[wasm_bindgen]
pub fn default_params_json() -> String {
    serde_json::to_string(&WaveguideParams::default()).unwrap_or_default()
}

/// Checks a parameter document strictly, including blend windows.
///
/// # Errors
/// Returns a JavaScript error with a readable message for the first
/// offending value.
#[wasm_bindgen]
pub fn validate_params(json: &str) -> Result<(), JsValue> {
    validate_params_internal(json).map_err(JsValue::from)
}

/// Generates the horn surface for on-screen rendering.
///
/// # Errors
/// Returns a JavaScript error when the JSON is malformed or the profile
/// has no real solution.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = generate_mesh(default_params_json());
/// // console.log(mesh.vertex_count, mesh.triangle_count);
/// ```
#[wasm_bindgen(js_name = generate_mesh)]
pub fn generate_mesh_handle(json: &str) -> Result<MeshHandle, JsValue> {
    generate_mesh_internal(json).map_err(JsValue::from)
}

/// Generates the horn and returns its metrics as JSON.
///
/// # Errors
/// Same as [`generate_mesh_handle`].
#[wasm_bindgen]
pub fn mesh_metrics_json(json: &str) -> Result<String, JsValue> {
    mesh_metrics_json_internal(json).map_err(JsValue::from)
}

/// Generates the horn and returns the full ring data as JSON, for text
/// exporters on the JavaScript side.
///
/// # Errors
/// Same as [`generate_mesh_handle`].
#[wasm_bindgen]
pub fn mesh_rings_json(json: &str) -> Result<String, JsValue> {
    mesh_rings_json_internal(json).map_err(JsValue::from)
}

/// Generates the horn and encodes it as binary STL, shelled according to
/// the `shell` section of the document.
///
/// # Errors
/// Returns a JavaScript error when generation or encoding fails.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const bytes = generate_stl(JSON.stringify({ shell: { enabled: true } }));
/// // const blob = new Blob([bytes], { type: "model/stl" });
/// ```
#[wasm_bindgen]
pub fn generate_stl(json: &str) -> Result<Vec<u8>, JsValue> {
    generate_stl_internal(json).map_err(JsValue::from)
}

/// Parses a JSON parameter document; missing fields take their defaults.
pub fn parse_params(json: &str) -> Result<WaveguideParams, ApiError> {
    Ok(serde_json::from_str(json)?)
}

/// Host-only helper behind [`validate_params`].
pub fn validate_params_internal(json: &str) -> Result<(), ApiError> {
    parse_params(json)?.validate()?;
    Ok(())
}

/// Host-only helper behind [`generate_mesh_handle`].
///
/// # Examples
/// ```
/// let mesh = waveguide_wasm::generate_mesh_internal(r#"{ "slices": 36 }"#).unwrap();
/// assert_eq!(mesh.slices(), 36);
/// ```
pub fn generate_mesh_internal(json: &str) -> Result<MeshHandle, ApiError> {
    let mesh = build_mesh(json)?;
    Ok(MeshHandle::from_mesh(&mesh))
}

/// Host-only helper behind [`mesh_metrics_json`].
pub fn mesh_metrics_json_internal(json: &str) -> Result<String, ApiError> {
    let mesh = build_mesh(json)?;
    Ok(serde_json::to_string(&MeshMetrics::from_mesh(&mesh))?)
}

/// Host-only helper behind [`mesh_rings_json`].
pub fn mesh_rings_json_internal(json: &str) -> Result<String, ApiError> {
    let mesh = build_mesh(json)?;
    Ok(serde_json::to_string(&mesh)?)
}

/// Host-only helper behind [`generate_stl`].
pub fn generate_stl_internal(json: &str) -> Result<Vec<u8>, ApiError> {
    let params = parse_params(json)?;
    let mesh = generate_mesh(&params)?;
    let bytes = export_stl(&mesh, &params.shell, DEFAULT_STL_HEADER)?;
    Ok(bytes)
}

fn build_mesh(json: &str) -> Result<MeshData, ApiError> {
    let params = parse_params(json)?;
    Ok(generate_mesh(&params)?)
}
