//! Class names and attributes making up the page markup contract.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Names the controller looks for in the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markup {
    /// Class flagging an element that opens a modal.
    pub trigger_class: String,
    /// Attribute on a trigger naming the modal id to open.
    pub target_attribute: String,
    pub modal_class: String,
    pub content_class: String,
    pub close_class: String,
    /// Class of the region holding a modal's zoomable images.
    pub images_class: String,
    pub zoom_class: String,
    /// Class toggled on the zoom overlay while it is shown.
    pub active_class: String,
    /// Attribute on a modal recording the id of the trigger that opened it.
    pub trigger_record_attribute: String,
    /// Marker set on an image once its zoom handlers are bound.
    pub zoom_marker_attribute: String,
    /// Attribute consulted when an image has no live source.
    pub source_fallback_attribute: String,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            trigger_class: String::from("modal-link"),
            target_attribute: String::from("data-target"),
            modal_class: String::from("modal"),
            content_class: String::from("modal-content"),
            close_class: String::from("close-btn"),
            images_class: String::from("modal-images"),
            zoom_class: String::from("zoom-overlay"),
            active_class: String::from("active"),
            trigger_record_attribute: String::from("data-modal-trigger"),
            zoom_marker_attribute: String::from("data-zoom-handler"),
            source_fallback_attribute: String::from("data-src"),
        }
    }
}

impl Markup {
    #[must_use]
    pub fn trigger_selector(&self) -> String {
        format!(".{}", self.trigger_class)
    }

    #[must_use]
    pub fn modal_selector(&self) -> String {
        format!(".{}", self.modal_class)
    }

    #[must_use]
    pub fn close_selector(&self) -> String {
        format!(".{}", self.close_class)
    }

    /// Close control inside a modal's content region.
    #[must_use]
    pub fn content_close_selector(&self) -> String {
        format!(".{} .{}", self.content_class, self.close_class)
    }

    /// Images inside one modal's image region.
    #[must_use]
    pub fn images_selector(&self) -> String {
        format!(".{} img", self.images_class)
    }

    /// Images inside any modal on the page.
    #[must_use]
    pub fn all_images_selector(&self) -> String {
        format!(".{} .{} img", self.modal_class, self.images_class)
    }

    #[must_use]
    pub fn zoom_selector(&self) -> String {
        format!(".{}", self.zoom_class)
    }

    /// # Errors
    ///
    /// Returns the first class name that is not a plain CSS identifier, or the
    /// first data attribute that lacks the `data-` prefix.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let classes = [
            ("trigger_class", &self.trigger_class),
            ("modal_class", &self.modal_class),
            ("content_class", &self.content_class),
            ("close_class", &self.close_class),
            ("images_class", &self.images_class),
            ("zoom_class", &self.zoom_class),
            ("active_class", &self.active_class),
        ];
        for (field, value) in classes {
            if value.is_empty() {
                return Err(ConfigError::Empty { field });
            }
            if !is_identifier(value) {
                return Err(ConfigError::InvalidClass {
                    field,
                    value: value.clone(),
                });
            }
        }

        let data_attributes = [
            ("target_attribute", &self.target_attribute),
            ("trigger_record_attribute", &self.trigger_record_attribute),
            ("zoom_marker_attribute", &self.zoom_marker_attribute),
            ("source_fallback_attribute", &self.source_fallback_attribute),
        ];
        for (field, value) in data_attributes {
            let suffix = value.strip_prefix("data-").unwrap_or_default();
            if suffix.is_empty() || !is_identifier(suffix) {
                return Err(ConfigError::NotDataAttribute {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Conservative CSS identifier check: ASCII letters, digits, `-` and `_`,
/// not starting with a digit.
pub(crate) fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '-' || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selectors_follow_markup_contract() {
        let markup = Markup::default();
        assert_eq!(markup.trigger_selector(), ".modal-link");
        assert_eq!(markup.content_close_selector(), ".modal-content .close-btn");
        assert_eq!(markup.images_selector(), ".modal-images img");
        assert_eq!(markup.all_images_selector(), ".modal .modal-images img");
        assert_eq!(markup.zoom_selector(), ".zoom-overlay");
        assert!(markup.validate().is_ok());
    }

    #[test]
    fn rejects_class_with_selector_syntax() {
        let markup = Markup {
            close_class: String::from("close btn"),
            ..Markup::default()
        };
        let err = markup.validate().expect_err("space is not allowed");
        assert!(matches!(
            err,
            ConfigError::InvalidClass {
                field: "close_class",
                ..
            }
        ));
    }

    #[test]
    fn rejects_plain_attribute_for_marker() {
        let markup = Markup {
            zoom_marker_attribute: String::from("zoomed"),
            ..Markup::default()
        };
        assert!(matches!(
            markup.validate(),
            Err(ConfigError::NotDataAttribute { .. })
        ));
    }

    #[test]
    fn identifier_rules() {
        assert!(is_identifier("modal-link"));
        assert!(is_identifier("_private"));
        assert!(!is_identifier("9lives"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("a.b"));
    }
}
