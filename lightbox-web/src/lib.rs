#![forbid(unsafe_code)]
//! Browser front-end for `lightbox-core`.
//!
//! Binds the overlay controller to the live document: a [`page::DomPage`]
//! implementing the core `Page` trait over `web_sys`, the global listeners
//! installed once per page, and the wasm entry point.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod config;
pub mod console;
pub mod dom;
pub mod error;
pub mod events;
pub mod install;
pub mod page;

pub use error::WebError;
pub use install::{install, uninstall, with_controller};
pub use page::DomPage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    console::init(log::LevelFilter::Info);
    install::install_when_ready();
}

/// Install the controller from script, e.g. after injecting gallery markup.
///
/// Resolves to `false` when the page already has a controller.
///
/// # Errors
///
/// Rejects when the document is unavailable or listeners cannot be attached.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = initLightbox)]
pub fn init_lightbox() -> Result<bool, JsValue> {
    install::install_from_page().map_err(|err| JsValue::from_str(&err.to_string()))
}
