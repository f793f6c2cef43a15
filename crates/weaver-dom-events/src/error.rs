use miette::Diagnostic;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, Error, Diagnostic)]
pub enum DomEventError {
    #[error("failed to construct {kind} event: {message}")]
    #[diagnostic(code(dom_events::fire::construct))]
    Construct { kind: &'static str, message: String },

    #[error("event dispatch failed: {0}")]
    #[diagnostic(code(dom_events::fire::dispatch))]
    Dispatch(String),
}

impl DomEventError {
    pub(crate) fn construct(kind: &'static str, err: &JsValue) -> Self {
        Self::Construct {
            kind,
            message: js_message(err),
        }
    }

    pub(crate) fn dispatch(err: &JsValue) -> Self {
        Self::Dispatch(js_message(err))
    }
}

/// Render a thrown JS value as text.
///
/// `Error` objects contribute their message; strings are used as-is;
/// anything else falls back to the debug representation.
pub fn js_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
