//! Light/dark display preference.

use serde::Serialize;
use std::fmt;

use crate::storage::{KeyValueStore, StorageKeys};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Only the exact stored value `dark` selects the dark theme.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted theme choice. Best-effort like the counters.
#[derive(Debug, Clone)]
pub struct ThemePreference<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn new(store: S, keys: &StorageKeys) -> Self {
        Self {
            store,
            key: keys.theme_key(),
        }
    }

    /// Saved theme, light when missing or unreadable.
    pub fn load(&self) -> Theme {
        match self.store.get_item(&self.key) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(err) => {
                log::warn!("theme read failed: {err}");
                Theme::Light
            }
        }
    }

    pub fn save(&self, theme: Theme) {
        if let Err(err) = self.store.set_item(&self.key, theme.as_str()) {
            log::warn!("theme write failed: {err}");
        }
    }

    /// Flip `current`, persist, and return the new theme.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.save(next);
        next
    }
}
