// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files (`assets/i18n/`)
//! - Placeable arguments for counters and inline values
//! - Visible `MISSING:` marker when a key has no translation

pub mod fluent;
