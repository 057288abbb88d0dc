// SPDX-License-Identifier: MPL-2.0
//! Theme selection and persistence.
//!
//! A theme is identified by a name such as `theme-dark`. Names come from the
//! theme switcher, but also from the settings file, which a user can edit by
//! hand; every name is therefore validated before it is applied. Exactly one
//! theme is active at a time and a storage failure never prevents a change.

pub mod storage;

pub use storage::{ConfigThemeStorage, MemoryThemeStorage, ThemeStorage};

use crate::config::DEFAULT_THEME;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static THEME_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^theme-[a-zA-Z0-9-]+$").unwrap_or_else(|e| panic!("invalid theme pattern: {e}"))
});

/// A validated theme identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThemeName(String);

impl ThemeName {
    /// Returns `None` unless `raw` matches `theme-` followed by letters,
    /// digits or dashes.
    pub fn parse(raw: &str) -> Option<Self> {
        THEME_NAME_PATTERN
            .is_match(raw)
            .then(|| Self(raw.to_string()))
    }

    /// Validates `raw`, substituting the default theme on mismatch.
    pub fn parse_or_default(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|| {
            tracing::warn!(theme = raw, "Invalid theme name, using default");
            Self::default()
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ThemeName {
    fn default() -> Self {
        Self(DEFAULT_THEME.to_string())
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The themes offered by the theme switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KnownTheme {
    #[default]
    Default,
    Dark,
    Sepia,
    HighContrast,
}

impl KnownTheme {
    pub const ALL: [KnownTheme; 4] = [
        KnownTheme::Default,
        KnownTheme::Dark,
        KnownTheme::Sepia,
        KnownTheme::HighContrast,
    ];

    pub fn name(self) -> &'static str {
        match self {
            KnownTheme::Default => "theme-default",
            KnownTheme::Dark => "theme-dark",
            KnownTheme::Sepia => "theme-sepia",
            KnownTheme::HighContrast => "theme-high-contrast",
        }
    }

    pub fn i18n_key(self) -> &'static str {
        match self {
            KnownTheme::Default => "theme-name-default",
            KnownTheme::Dark => "theme-name-dark",
            KnownTheme::Sepia => "theme-name-sepia",
            KnownTheme::HighContrast => "theme-name-high-contrast",
        }
    }

    /// Valid names outside the fixed set have no palette of their own and
    /// are drawn like the default theme.
    pub fn for_name(name: &ThemeName) -> Self {
        Self::ALL
            .into_iter()
            .find(|theme| theme.name() == name.as_str())
            .unwrap_or_default()
    }
}

/// Owns the active theme and keeps it in sync with storage.
#[derive(Debug)]
pub struct ThemeController<S> {
    storage: S,
    active: ThemeName,
}

impl<S: ThemeStorage> ThemeController<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            active: ThemeName::default(),
        }
    }

    pub fn active(&self) -> &ThemeName {
        &self.active
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Makes `raw` (or the default, if invalid) the active theme and tries
    /// to persist it.
    pub fn apply(&mut self, raw: &str) -> ThemeName {
        let name = ThemeName::parse_or_default(raw);
        self.active = name.clone();
        if let Err(err) = self.storage.write(name.as_str()) {
            tracing::warn!(theme = %name, error = %err, "Could not save theme preference");
        }
        name
    }

    /// Activates the persisted theme. Missing, unreadable or invalid
    /// preferences all yield the default. Storage is not written.
    pub fn restore(&mut self) -> ThemeName {
        let stored = match self.storage.read() {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(error = %err, "Could not read theme preference");
                None
            }
        };
        self.active = stored
            .as_deref()
            .map(ThemeName::parse_or_default)
            .unwrap_or_default();
        tracing::debug!(theme = %self.active, "Theme restored");
        self.active.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};

    /// Storage that fails every operation.
    struct BrokenStorage;

    impl ThemeStorage for BrokenStorage {
        fn read(&self) -> Result<Option<String>> {
            Err(Error::Io("storage unavailable".into()))
        }

        fn write(&mut self, _theme: &str) -> Result<()> {
            Err(Error::Io("quota exceeded".into()))
        }
    }

    #[test]
    fn theme_names_are_validated() {
        assert!(ThemeName::parse("theme-dark").is_some());
        assert!(ThemeName::parse("theme-High-Contrast-2").is_some());
        assert!(ThemeName::parse("theme-").is_none());
        assert!(ThemeName::parse("dark").is_none());
        assert!(ThemeName::parse("theme-dark extra").is_none());
        assert!(ThemeName::parse("theme-<script>").is_none());
        assert!(ThemeName::parse("theme-a\ntheme-b").is_none());
    }

    #[test]
    fn injected_name_falls_back_to_default() {
        let mut controller = ThemeController::new(MemoryThemeStorage::default());
        let applied = controller.apply("theme-<script>");
        assert_eq!(applied.as_str(), "theme-default");
        assert_eq!(controller.active().as_str(), "theme-default");
    }

    #[test]
    fn apply_then_restore_round_trips() {
        let mut controller = ThemeController::new(MemoryThemeStorage::default());
        controller.apply("theme-dark");

        let mut reloaded = ThemeController::new(controller.storage().clone());
        assert_eq!(reloaded.restore().as_str(), "theme-dark");
        assert_eq!(reloaded.active().as_str(), "theme-dark");
    }

    #[test]
    fn storage_failures_never_block_the_change() {
        let mut controller = ThemeController::new(BrokenStorage);
        assert_eq!(controller.apply("theme-sepia").as_str(), "theme-sepia");
        assert_eq!(controller.active().as_str(), "theme-sepia");

        assert_eq!(controller.restore().as_str(), "theme-default");
    }

    #[test]
    fn tampered_preference_restores_default() {
        let storage = MemoryThemeStorage::with_value("theme-<img onerror=x>");
        let mut controller = ThemeController::new(storage);
        assert_eq!(controller.restore(), ThemeName::default());
    }

    #[test]
    fn missing_preference_restores_default() {
        let mut controller = ThemeController::new(MemoryThemeStorage::default());
        assert_eq!(controller.restore(), ThemeName::default());
        assert_eq!(controller.storage().value(), None);
    }

    #[test]
    fn unlisted_valid_name_uses_default_palette() {
        let name = ThemeName::parse("theme-ocean").unwrap();
        assert_eq!(KnownTheme::for_name(&name), KnownTheme::Default);
        let dark = ThemeName::parse("theme-dark").unwrap();
        assert_eq!(KnownTheme::for_name(&dark), KnownTheme::Dark);
    }

    #[test]
    fn every_known_theme_has_a_valid_name() {
        for theme in KnownTheme::ALL {
            assert!(ThemeName::parse(theme.name()).is_some(), "{:?}", theme);
        }
        assert_eq!(KnownTheme::Default.name(), DEFAULT_THEME);
    }
}
