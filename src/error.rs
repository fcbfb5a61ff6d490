use thiserror::Error;

/// Failures that stop the gallery from being set up at all.
///
/// Problems with individual elements are not errors; those are skipped.
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("invalid gallery config: {0}")]
    Config(#[from] serde_json::Error),

    /// An exception thrown by a DOM call.
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<wasm_bindgen::JsValue> for GalleryError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        GalleryError::Dom(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

impl From<GalleryError> for wasm_bindgen::JsValue {
    fn from(err: GalleryError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
