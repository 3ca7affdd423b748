use thiserror::Error;

#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No window available (not running in a browser)")]
    MissingWindow,
}

pub type Result<T> = std::result::Result<T, HighlightError>;

#[cfg(target_arch = "wasm32")]
impl From<HighlightError> for wasm_bindgen::JsValue {
    fn from(err: HighlightError) -> Self {
        wasm_bindgen::JsError::new(&err.to_string()).into()
    }
}
