//! Localized strings used by the overlays.
//!
//! Bundles are embedded JSON documents keyed by dotted paths
//! (`zoom.fallback_alt`). Lookups fall back to the default locale, then to
//! the key itself.

use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::BTreeMap;

/// Locale used when neither configuration nor the page declares a known one.
pub const DEFAULT_LANG: &str = "ko";

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("ko", include_str!("../i18n/ko.json")),
    ("en", include_str!("../i18n/en.json")),
    ("ja", include_str!("../i18n/ja.json")),
    ("zh", include_str!("../i18n/zh.json")),
    ("es", include_str!("../i18n/es.json")),
    ("fr", include_str!("../i18n/fr.json")),
    ("de", include_str!("../i18n/de.json")),
];

static BUNDLES: Lazy<BTreeMap<&'static str, Value>> = Lazy::new(|| {
    LOCALE_TABLE
        .iter()
        .filter_map(|(code, data)| match serde_json::from_str(data) {
            Ok(value) => Some((*code, value)),
            Err(err) => {
                log::error!("locale bundle {code} is invalid: {err}");
                None
            }
        })
        .collect()
});

/// Codes of every embedded locale.
pub fn supported_langs() -> impl Iterator<Item = &'static str> {
    LOCALE_TABLE.iter().map(|(code, _)| *code)
}

fn primary_subtag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn supported(tag: &str) -> Option<&'static str> {
    let primary = primary_subtag(tag);
    supported_langs().find(|code| *code == primary)
}

/// Pick the locale for a page: explicit override first, then the document
/// language, then [`DEFAULT_LANG`].
#[must_use]
pub fn resolve_lang(configured: Option<&str>, document: Option<&str>) -> &'static str {
    configured
        .and_then(supported)
        .or_else(|| document.and_then(supported))
        .unwrap_or(DEFAULT_LANG)
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn lookup(lang: &str, key: &str) -> Option<String> {
    BUNDLES
        .get(lang)
        .and_then(|bundle| get_nested_value(bundle, key))
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Translate `key` for `lang`.
#[must_use]
pub fn t(lang: &str, key: &str) -> String {
    lookup(lang, key)
        .or_else(|| lookup(DEFAULT_LANG, key))
        .unwrap_or_else(|| key.to_string())
}

/// Alternative text given to a zoomed image that has none of its own.
#[must_use]
pub fn fallback_alt(lang: &str) -> String {
    t(lang, "zoom.fallback_alt")
}

/// Accessible label of the zoom overlay, which closes when activated.
#[must_use]
pub fn dismiss_label(lang: &str) -> String {
    t(lang, "zoom.dismiss")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bundle_parses_and_has_fallback_alt() {
        for code in supported_langs() {
            assert!(BUNDLES.contains_key(code), "{code} failed to parse");
            assert!(lookup(code, "zoom.fallback_alt").is_some(), "{code}");
        }
    }

    #[test]
    fn default_fallback_alt_matches_korean_page_text() {
        assert_eq!(fallback_alt(DEFAULT_LANG), "확대된 이미지");
        assert_eq!(fallback_alt("en"), "Enlarged image");
    }

    #[test]
    fn resolve_prefers_config_then_document() {
        assert_eq!(resolve_lang(Some("en"), Some("ja")), "en");
        assert_eq!(resolve_lang(None, Some("ja-JP")), "ja");
        assert_eq!(resolve_lang(Some("xx"), Some("fr_CA")), "fr");
        assert_eq!(resolve_lang(None, None), DEFAULT_LANG);
        assert_eq!(resolve_lang(None, Some("")), DEFAULT_LANG);
    }

    #[test]
    fn missing_keys_fall_back() {
        assert_eq!(t("unknown", "zoom.dismiss"), "닫기");
        assert_eq!(t("en", "missing.key"), "missing.key");
    }
}
