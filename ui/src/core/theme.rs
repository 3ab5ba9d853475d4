//! Light/dark theme preference, persisted under the `theme` key.

use tracing::warn;

use super::storage::KeyValueStore;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Value written to `<body data-theme=...>` and to storage.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_attr(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Font Awesome icon shown on the toggle button.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Light => "fa-sun",
            Self::Dark => "fa-moon",
        }
    }
}

/// Saved preference, or the default when absent or unrecognised.
pub fn load_theme(store: &impl KeyValueStore) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|raw| Theme::from_attr(&raw))
        .unwrap_or_default()
}

/// Flip `current` and persist the result. A failed write is logged; the
/// returned theme still applies for this page.
pub fn toggle_theme(store: &impl KeyValueStore, current: Theme) -> Theme {
    let next = current.toggled();
    if let Err(err) = store.set(THEME_KEY, next.as_attr()) {
        warn!("failed to persist theme preference: {err}");
    }
    next
}
