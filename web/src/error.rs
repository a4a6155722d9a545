use sweepview_core::ViewError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum WebError {
    #[error(transparent)]
    View(#[from] ViewError),
    #[error("Could not find a canvas with id={0:?}")]
    MissingCanvas(String),
    #[error("Canvas has no 2d context")]
    MissingContext,
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, WebError>;
