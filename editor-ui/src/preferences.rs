//! User preferences shared through Dioxus context.
//!
//! Preferences live in `localStorage` as JSON. The toolbar only reads the
//! theme; the user menu is the one place that writes it.

use dioxus::prelude::*;
use editor_types::Theme;
use serde::{Deserialize, Serialize};

const PREFERENCES_KEY: &str = "editor-preferences";
const LEGACY_THEME_KEY: &str = "theme-preference";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
}

impl Preferences {
    /// Cached preferences, or defaults when nothing usable is stored.
    pub fn load() -> Self {
        let Some(storage) = local_storage() else {
            return Self::default();
        };

        let stored = storage.get_item(PREFERENCES_KEY).ok().flatten();
        let legacy = storage.get_item(LEGACY_THEME_KEY).ok().flatten();
        resolve_preferences(stored.as_deref(), legacy.as_deref())
    }

    pub fn persist(&self) {
        let Some(storage) = local_storage() else {
            return;
        };
        match serde_json::to_string(self) {
            Ok(json) => {
                if storage.set_item(PREFERENCES_KEY, &json).is_err() {
                    log::warn!("Failed to persist editor preferences");
                }
            }
            Err(e) => log::warn!("Failed to serialize editor preferences: {}", e),
        }
    }
}

pub fn parse_preferences(raw: &str) -> Preferences {
    try_parse_preferences(raw).unwrap_or_default()
}

fn try_parse_preferences(raw: &str) -> Option<Preferences> {
    match serde_json::from_str::<Preferences>(raw) {
        Ok(preferences) => Some(preferences),
        Err(e) => {
            log::warn!("Ignoring stored preferences: {}", e);
            None
        }
    }
}

/// Picks the stored JSON when it parses, else the legacy theme value, else defaults.
pub fn resolve_preferences(stored: Option<&str>, legacy_theme: Option<&str>) -> Preferences {
    stored
        .and_then(try_parse_preferences)
        .or_else(|| {
            legacy_theme
                .and_then(|theme| theme.parse::<Theme>().ok())
                .map(|theme| Preferences { theme })
        })
        .unwrap_or_default()
}

pub fn apply_theme_to_document(theme: Theme) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Provides `Signal<Preferences>` to the subtree and keeps the document theme in sync.
#[component]
pub fn PreferencesProvider(children: Element) -> Element {
    let preferences = use_context_provider(|| Signal::new(Preferences::load()));

    use_effect(move || {
        apply_theme_to_document(preferences.read().theme);
    });

    rsx! { {children} }
}

/// Preferences from the nearest provider, or a local default when rendered without one.
pub fn use_preferences() -> Signal<Preferences> {
    let fallback = use_signal(Preferences::default);
    try_use_context::<Signal<Preferences>>().unwrap_or(fallback)
}

pub fn set_theme(mut preferences: Signal<Preferences>, theme: Theme) {
    let mut next = *preferences.read();
    next.theme = theme;
    preferences.set(next);
    next.persist();
    apply_theme_to_document(theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_preferences_parse() {
        let prefs = parse_preferences(r#"{"theme":"dark"}"#);
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn missing_theme_defaults_to_light() {
        assert_eq!(parse_preferences("{}").theme, Theme::Light);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        assert_eq!(parse_preferences("not json"), Preferences::default());
        assert_eq!(
            parse_preferences(r#"{"theme":"sepia"}"#),
            Preferences::default()
        );
    }

    #[test]
    fn legacy_theme_used_when_stored_json_is_unusable() {
        let prefs = resolve_preferences(Some("not json"), Some("dark"));
        assert_eq!(prefs.theme, Theme::Dark);

        let prefs = resolve_preferences(None, Some("dark"));
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn stored_json_wins_over_legacy_theme() {
        let prefs = resolve_preferences(Some(r#"{"theme":"light"}"#), Some("dark"));
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn nothing_usable_gives_defaults() {
        assert_eq!(resolve_preferences(None, None), Preferences::default());
        assert_eq!(
            resolve_preferences(Some("{"), Some("sepia")),
            Preferences::default()
        );
    }
}
