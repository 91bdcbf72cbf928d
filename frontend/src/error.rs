use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<JsValue> for ControllerError {
    fn from(value: JsValue) -> Self {
        ControllerError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
