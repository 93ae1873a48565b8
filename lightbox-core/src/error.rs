use thiserror::Error;

/// Failures reported by a [`crate::Page`] when a DOM mutation cannot be applied.
///
/// The controller never propagates these past an event handler: they are
/// logged and the handler carries on with whatever else it can still do.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("element is not attached to the document")]
    Detached,
    #[error("element cannot receive focus")]
    NotFocusable,
    #[error("element is not an image")]
    NotAnImage,
    #[error("document has no body")]
    MissingBody,
}

/// Errors raised when a controller configuration is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} is not a valid class name (got {value:?})")]
    InvalidClass { field: &'static str, value: String },
    #[error("{field} must be a data attribute (got {value:?})")]
    NotDataAttribute { field: &'static str, value: String },
    #[error("trigger id prefix {0:?} cannot start an element id")]
    InvalidIdPrefix(String),
}
