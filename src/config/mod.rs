// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and the persisted theme identifier
//! - `[content]` - Where the manifest and content files are read from
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`set_general_value()` with an explicit path
//! 2. Set `COMPREHENSION_READER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use comprehension_reader::config;
//!
//! let config = config::load_with_override(None);
//! println!("Content root: {}", config.content_root());
//! if let Some(path) = config::get_config_path_with_override(None) {
//!     config::set_general_value(&path, "theme", "theme-dark").expect("Failed to save config");
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Persisted theme identifier. Stored as written and validated on read,
    /// so a hand-edited value can never reach the renderer unchecked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Content location settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContentConfig {
    /// Directory or base URL that relative content paths resolve against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    /// Manifest path relative to `root`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub content: ContentConfig,
}

impl Config {
    /// Content root, falling back to the working directory.
    pub fn content_root(&self) -> &str {
        self.content.root.as_deref().unwrap_or(DEFAULT_CONTENT_ROOT)
    }

    /// Manifest path, falling back to `data/manifest.json`.
    pub fn manifest_path(&self) -> &str {
        self.content
            .manifest
            .as_deref()
            .unwrap_or(DEFAULT_MANIFEST_PATH)
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
pub fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from a custom directory (or the resolved default).
///
/// A missing file yields the defaults. An unreadable or malformed file is
/// logged and also yields the defaults; the file is left untouched.
pub fn load_with_override(base_dir: Option<PathBuf>) -> Config {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_from_path(&path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Failed to load settings, using defaults");
            Config::default()
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Sets one `[general]` key in the file at `path`.
///
/// The file is edited as a TOML table, so sections and keys this version does
/// not know about are written back as they were. A malformed file is an error
/// and is never overwritten.
pub fn set_general_value(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut table = if path.exists() {
        fs::read_to_string(path)?.parse::<toml::Table>()?
    } else {
        toml::Table::new()
    };
    let general = table
        .entry("general")
        .or_insert(toml::Value::Table(toml::Table::new()));
    let Some(general) = general.as_table_mut() else {
        return Err(Error::Config("[general] is not a table".to_string()));
    };
    general.insert(key.to_string(), toml::Value::String(value.to_string()));

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(&table)?)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
