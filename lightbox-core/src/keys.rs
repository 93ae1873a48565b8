// Centralized keyboard mapping for overlay handlers.

pub const ESCAPE: &str = "Escape";

/// Keys that activate a focused image, as reported by `KeyboardEvent.key`.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[must_use]
pub fn is_escape(key: &str) -> bool {
    key == ESCAPE || key == "Esc"
}
