// error.rs - Errors surfaced to the host
//
// Everything inside a frame is clamped or ignored; errors only arise at the
// edges where strings come in from the page (names, JSON config).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid scene config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("unknown weather: {0:?}")]
    UnknownWeather(String),

    #[error("unknown layer: {0:?}")]
    UnknownLayer(String),

    #[error("unknown click mode: {0:?}")]
    UnknownClickMode(String),
}

impl From<SceneError> for wasm_bindgen::JsValue {
    fn from(err: SceneError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
