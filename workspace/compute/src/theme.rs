//! Light/dark theme preference and where it is persisted.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::Result;

/// Storage key of the theme preference.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

/// A string key-value store such as the browser's local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process store used by tests and non-browser callers.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The active theme, backed by a [`KeyValueStore`].
///
/// Only the exact value `"dark"` selects the dark theme on load. Anything
/// else, including a missing entry or an unreadable store, means light.
#[derive(Debug, Clone)]
pub struct ThemeStore<S> {
    store: S,
    theme: Theme,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn load(store: S) -> Self {
        let theme = match store.get(THEME_KEY) {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("Falling back to the light theme: {}", e);
                Theme::default()
            }
        };
        debug!("Loaded theme '{}'", theme.as_str());
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme and persists it.
    ///
    /// The flip takes effect even when persisting fails; the error is
    /// returned so the caller can tell the user it will not survive a reload.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        self.store.set(THEME_KEY, theme.as_str()).map_err(|e| {
            warn!("Theme '{}' applied but not persisted: {}", theme.as_str(), e);
            e
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
