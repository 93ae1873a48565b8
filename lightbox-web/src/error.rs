use crate::dom;
use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("listener registration failed: {0}")]
    Listener(String),
}

impl WebError {
    pub(crate) fn listener(err: &JsValue) -> Self {
        Self::Listener(dom::js_error_message(err))
    }
}
