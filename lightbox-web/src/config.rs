//! Configuration embedded in the page.
//!
//! ```html
//! <script type="application/json" id="lightbox-config">
//!   { "scroll_lock": "per_overlay", "locale": "en" }
//! </script>
//! ```

use lightbox_core::ControllerConfig;
use web_sys::Document;

pub const CONFIG_ELEMENT_ID: &str = "lightbox-config";

/// Parse configuration text, falling back to defaults when it is missing,
/// blank or rejected.
#[must_use]
pub fn parse_page_config(text: Option<&str>) -> ControllerConfig {
    let Some(text) = text.map(str::trim).filter(|text| !text.is_empty()) else {
        return ControllerConfig::default();
    };
    match ControllerConfig::from_json(text) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            ControllerConfig::default()
        }
    }
}

/// Read `#lightbox-config` from `document`.
#[must_use]
pub fn load_page_config(document: &Document) -> ControllerConfig {
    let text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    parse_page_config(text.as_deref())
}
