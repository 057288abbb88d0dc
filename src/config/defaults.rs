// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Theme Defaults
// ==========================================================================

/// Theme applied when no valid preference is stored.
pub const DEFAULT_THEME: &str = "theme-default";

// ==========================================================================
// Content Defaults
// ==========================================================================

/// Root that relative content paths resolve against (the working directory).
pub const DEFAULT_CONTENT_ROOT: &str = ".";

/// Manifest location, relative to the content root.
pub const DEFAULT_MANIFEST_PATH: &str = "data/manifest.json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_manifest_is_relative() {
        assert!(!DEFAULT_MANIFEST_PATH.starts_with('/'));
        assert!(DEFAULT_MANIFEST_PATH.ends_with(".json"));
    }

    #[test]
    fn default_theme_uses_theme_prefix() {
        assert!(DEFAULT_THEME.starts_with("theme-"));
    }
}
