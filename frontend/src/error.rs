use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("backend answered with status {0}")]
    Status(u16),

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("no window available")]
    NoWindow,

    #[error("damping factor must be in (0, 1], got {0}")]
    InvalidDamping(f64),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
