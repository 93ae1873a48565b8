//! Controller configuration.
//!
//! Every field has a default, so an empty JSON object is a valid
//! configuration and pages only spell out what they change.

use crate::error::ConfigError;
use crate::focus::FocusTrapScope;
use crate::markup::{Markup, is_identifier};
use crate::scroll::ScrollLockPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    #[serde(default)]
    pub markup: Markup,
    /// Locale override; when unset the document language is used.
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub scroll_lock: ScrollLockPolicy,
    #[serde(default)]
    pub focus_trap: FocusTrapScope,
    /// Return focus to the originating image when the zoom overlay closes.
    #[serde(default = "ControllerConfig::default_restore_zoom_focus")]
    pub restore_zoom_focus: bool,
    #[serde(default = "ControllerConfig::default_trigger_id_prefix")]
    pub trigger_id_prefix: String,
}

impl ControllerConfig {
    const fn default_restore_zoom_focus() -> bool {
        true
    }

    fn default_trigger_id_prefix() -> String {
        String::from("modal-trigger-")
    }

    /// Behaviour of the original gallery script: scroll unlocks on any
    /// overlay close, focus is only trapped inside modals, and focus stays
    /// on the zoom image when the zoom overlay closes.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            scroll_lock: ScrollLockPolicy::PerOverlay,
            focus_trap: FocusTrapScope::ModalOnly,
            restore_zoom_focus: false,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any field fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns the first invalid markup name or id prefix.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.markup.validate()?;
        if self.trigger_id_prefix.is_empty() {
            return Err(ConfigError::Empty {
                field: "trigger_id_prefix",
            });
        }
        if !is_identifier(&self.trigger_id_prefix) {
            return Err(ConfigError::InvalidIdPrefix(self.trigger_id_prefix.clone()));
        }
        Ok(())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            markup: Markup::default(),
            locale: None,
            scroll_lock: ScrollLockPolicy::default(),
            focus_trap: FocusTrapScope::default(),
            restore_zoom_focus: Self::default_restore_zoom_focus(),
            trigger_id_prefix: Self::default_trigger_id_prefix(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = ControllerConfig::from_json("{}").unwrap();
        assert_eq!(config, ControllerConfig::default());
        assert!(config.restore_zoom_focus);
        assert_eq!(config.trigger_id_prefix, "modal-trigger-");
    }

    #[test]
    fn partial_markup_keeps_other_defaults() {
        let config = ControllerConfig::from_json(
            r#"{
                "markup": { "modal_class": "lightbox" },
                "scroll_lock": "per_overlay",
                "focus_trap": "modal_only",
                "locale": "en"
            }"#,
        )
        .unwrap();
        assert_eq!(config.markup.modal_class, "lightbox");
        assert_eq!(config.markup.close_class, "close-btn");
        assert_eq!(config.scroll_lock, ScrollLockPolicy::PerOverlay);
        assert_eq!(config.focus_trap, FocusTrapScope::ModalOnly);
        assert_eq!(config.locale.as_deref(), Some("en"));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = ControllerConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(format!("{err}").contains("JSON parsing error"));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(ControllerConfig::from_json(r#"{ "scroll_lock": "sometimes" }"#).is_err());
    }

    #[test]
    fn id_prefix_must_be_usable() {
        let err = ControllerConfig::from_json(r#"{ "trigger_id_prefix": "" }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Empty {
                field: "trigger_id_prefix"
            }
        ));
        assert!(matches!(
            ControllerConfig::from_json(r#"{ "trigger_id_prefix": "1st" }"#),
            Err(ConfigError::InvalidIdPrefix(_))
        ));
    }

    #[test]
    fn legacy_profile_reproduces_original_behaviour() {
        let legacy = ControllerConfig::legacy();
        assert_eq!(legacy.scroll_lock, ScrollLockPolicy::PerOverlay);
        assert_eq!(legacy.focus_trap, FocusTrapScope::ModalOnly);
        assert!(!legacy.restore_zoom_focus);
        assert!(legacy.validate().is_ok());
    }
}
