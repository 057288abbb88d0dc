// SPDX-License-Identifier: MPL-2.0
//! Durable storage for the theme preference.

use crate::config;
use crate::error::{Error, Result};
use std::path::PathBuf;

/// A single-key string store holding the chosen theme identifier.
///
/// Values are returned exactly as stored; validation happens in the caller.
pub trait ThemeStorage {
    fn read(&self) -> Result<Option<String>>;
    fn write(&mut self, theme: &str) -> Result<()>;
}

/// Stores the theme in the `[general] theme` key of `settings.toml`,
/// leaving every other setting untouched, unknown sections included.
#[derive(Debug, Clone, Default)]
pub struct ConfigThemeStorage {
    base_dir: Option<PathBuf>,
}

impl ConfigThemeStorage {
    /// Uses the standard config directory resolution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `base_dir` instead of the standard config directory.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir: Some(base_dir),
        }
    }

    fn path(&self) -> Result<PathBuf> {
        config::get_config_path_with_override(self.base_dir.clone())
            .ok_or_else(|| Error::Config("no config directory available".to_string()))
    }
}

impl ThemeStorage for ConfigThemeStorage {
    fn read(&self) -> Result<Option<String>> {
        let path = self.path()?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(config::load_from_path(&path)?.general.theme)
    }

    fn write(&mut self, theme: &str) -> Result<()> {
        // A corrupted file is left alone rather than replaced with defaults.
        config::set_general_value(&self.path()?, "theme", theme)
    }
}

/// In-memory storage for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStorage {
    value: Option<String>,
}

impl MemoryThemeStorage {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl ThemeStorage for MemoryThemeStorage {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.value.clone())
    }

    fn write(&mut self, theme: &str) -> Result<()> {
        self.value = Some(theme.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn config_storage_starts_empty() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let storage = ConfigThemeStorage::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(storage.read().unwrap(), None);
    }

    #[test]
    fn config_storage_round_trips_and_keeps_other_settings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join("settings.toml"),
            "[general]\nlanguage = \"fr\"\n\n[content]\nroot = \"/srv/reader\"\n",
        )
        .expect("failed to write config");

        let mut storage = ConfigThemeStorage::with_base_dir(temp_dir.path().to_path_buf());
        storage.write("theme-sepia").expect("failed to write theme");
        assert_eq!(storage.read().unwrap().as_deref(), Some("theme-sepia"));

        let config = config::load_from_path(&temp_dir.path().join("settings.toml")).unwrap();
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.content.root.as_deref(), Some("/srv/reader"));
    }

    #[test]
    fn config_storage_keeps_sections_it_does_not_know() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "[general]\ntheme = \"theme-dark\"\n\n[notes]\nlast = \"fox\"\n")
            .expect("failed to write config");

        let mut storage = ConfigThemeStorage::with_base_dir(temp_dir.path().to_path_buf());
        storage.write("theme-high-contrast").expect("failed to write theme");

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("[notes]"));
        assert!(written.contains("last = \"fox\""));
        assert_eq!(storage.read().unwrap().as_deref(), Some("theme-high-contrast"));
    }

    #[test]
    fn config_storage_does_not_overwrite_a_corrupted_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "[general\n").expect("failed to write config");

        let mut storage = ConfigThemeStorage::with_base_dir(temp_dir.path().to_path_buf());
        assert!(storage.read().is_err());
        assert!(storage.write("theme-dark").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[general\n");
    }

    #[test]
    fn stored_values_are_returned_unvalidated() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut storage = ConfigThemeStorage::with_base_dir(temp_dir.path().to_path_buf());
        storage.write("not-a-theme").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("not-a-theme"));
    }
}
