// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern: each screen turns its own
//! `Message` into an `Event` that the application forwards to the session.
//!
//! # Screens
//!
//! - [`list`] - Catalog of comprehensions, loading and error states
//! - [`reading`] - Passage text or picture with Start Questions and Back
//! - [`question`] - One question at a time with reveal and navigation
//! - [`theme_switcher`] - Fixed set of reading themes
//!
//! # Shared Infrastructure
//!
//! - [`focus`] - Keyboard focus and arrow-key navigation
//! - [`components`] - Reusable UI components (error display, picture)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Theme name to iced theme mapping

pub mod components;
pub mod design_tokens;
pub mod focus;
pub mod list;
pub mod question;
pub mod reading;
pub mod styles;
pub mod theme_switcher;
pub mod theming;
