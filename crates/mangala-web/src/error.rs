//! Errors raised while binding to the page

use wasm_bindgen::JsValue;

/// Failures from browser APIs
#[derive(Clone, Debug, thiserror::Error)]
pub enum WebError {
    /// No global `window` (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("no document")]
    NoDocument,

    /// A required element is not on the page.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// A canvas did not hand out a 2D context.
    #[error("2d context unavailable for #{0}")]
    NoContext(String),

    /// The platform lacks an API this path needs.
    #[error("unsupported: {0}")]
    Unsupported(&'static str),

    /// A DOM or platform call threw.
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        WebError::Js(describe(&value))
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Best-effort text for a thrown JS value
fn describe(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    js_sys::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
