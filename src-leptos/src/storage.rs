//! localStorage-backed preference store.
//!
//! Three keys: theme, AQI standard, and the pinned zone id list (a JSON
//! string array). Missing or unparseable values fall back to the defaults
//! (dark theme, national standard, no pins) instead of surfacing errors.

use vayu_types::{Preferences, Theme};

const KEY_THEME: &str = "vayu_theme";
const KEY_STANDARD: &str = "vayu_standard";
const KEY_PINS: &str = "vayu_pins";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load persisted preferences, defaulting any field that is absent or
/// fails to parse.
pub fn load_preferences() -> Preferences {
    let mut prefs = Preferences::default();
    let Some(storage) = local_storage() else {
        return prefs;
    };

    if let Ok(Some(theme)) = storage.get_item(KEY_THEME) {
        match theme.parse() {
            Ok(theme) => prefs.theme = theme,
            Err(e) => log::warn!("Ignoring stored theme: {}", e),
        }
    }
    if let Ok(Some(standard)) = storage.get_item(KEY_STANDARD) {
        match standard.parse() {
            Ok(standard) => prefs.standard = standard,
            Err(e) => log::warn!("Ignoring stored standard: {}", e),
        }
    }
    if let Ok(Some(pins)) = storage.get_item(KEY_PINS) {
        prefs.pinned = serde_json::from_str(&pins).unwrap_or_default();
    }

    prefs
}

/// Persist all preference fields. Write failures (storage full, privacy
/// mode) are logged and otherwise ignored.
pub fn save_preferences(prefs: &Preferences) {
    let Some(storage) = local_storage() else {
        return;
    };

    let pins = serde_json::to_string(&prefs.pinned).unwrap_or_else(|_| "[]".to_string());
    for (key, value) in [
        (KEY_THEME, prefs.theme.as_str().to_string()),
        (KEY_STANDARD, prefs.standard.as_str().to_string()),
        (KEY_PINS, pins),
    ] {
        if storage.set_item(key, &value).is_err() {
            log::warn!("Failed to persist {}", key);
        }
    }
}

/// Mirror the theme onto `<html data-theme="...">` so the stylesheet's
/// themed variables switch over.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if root.set_attribute("data-theme", theme.as_str()).is_err() {
        log::warn!("Failed to set data-theme attribute");
    }
}
