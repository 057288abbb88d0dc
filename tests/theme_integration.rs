// SPDX-License-Identifier: MPL-2.0
//! Theme persistence through the settings file.

use comprehension_reader::config;
use comprehension_reader::theme::{ConfigThemeStorage, ThemeController, ThemeStorage};
use tempfile::tempdir;

#[test]
fn applied_theme_survives_a_restart() {
    let dir = tempdir().expect("temp dir");

    let mut first = ThemeController::new(ConfigThemeStorage::with_base_dir(dir.path().into()));
    assert_eq!(first.restore().as_str(), "theme-default");
    first.apply("theme-dark");

    let mut second = ThemeController::new(ConfigThemeStorage::with_base_dir(dir.path().into()));
    assert_eq!(second.restore().as_str(), "theme-dark");
}

#[test]
fn theme_write_keeps_other_settings() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[general]\nlanguage = \"fr\"\n\n[content]\nroot = \"https://example.com/content\"\n\n[window]\nwidth = 1024\n",
    )
    .expect("seed settings");

    let mut storage = ConfigThemeStorage::with_base_dir(dir.path().into());
    storage.write("theme-sepia").expect("write theme");

    let reloaded = config::load_from_path(&path).expect("reload settings");
    assert_eq!(reloaded.general.theme.as_deref(), Some("theme-sepia"));
    assert_eq!(reloaded.general.language.as_deref(), Some("fr"));
    assert_eq!(
        reloaded.content.root.as_deref(),
        Some("https://example.com/content")
    );
    let written = std::fs::read_to_string(&path).expect("read settings");
    assert!(written.contains("[window]"));
}

#[test]
fn hand_edited_theme_is_rejected_on_restore() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[general]\ntheme = \"theme-x; background: url(evil)\"\n",
    )
    .expect("write settings");

    let mut controller =
        ThemeController::new(ConfigThemeStorage::with_base_dir(dir.path().into()));
    assert_eq!(controller.restore().as_str(), "theme-default");
}
