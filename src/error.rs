use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid launch date: {0}")]
    InvalidLaunchDate(#[from] chrono::ParseError),
    #[error("Failed to parse gallery items: {0}")]
    Items(#[from] serde_json::Error),
    #[error("DOM error: {0}")]
    Dom(String),
}

impl AppError {
    pub fn dom(context: &str) -> Self {
        AppError::Dom(context.to_string())
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
