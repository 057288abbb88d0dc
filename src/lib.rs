// SPDX-License-Identifier: MPL-2.0
//! `comprehension_reader` presents reading comprehension exercises with the
//! Iced GUI framework.
//!
//! Content is loaded from a manifest and a set of JSON files, shown as a list
//! of passages (text or pictures), and reviewed one question at a time. The
//! reading theme is a validated identifier persisted in the user's settings.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod session;
pub mod theme;
pub mod ui;
