//! Errors surfaced to JavaScript callers.

use thiserror::Error;
use waveguide_export::ExportError;
use waveguide_geometry::GeometryError;
use wasm_bindgen::JsValue;

/// Anything that can go wrong between a JSON parameter document and a
/// finished mesh or STL buffer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A parameter document did not parse, or a result did not serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Geometry generation failed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// STL export failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl From<ApiError> for JsValue {
    fn from(err: ApiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
