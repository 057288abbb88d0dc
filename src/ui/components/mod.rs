// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`error_display`] - Inline error and warning messages with optional
//!   technical details
//! - [`picture`] - Passage picture loaded asynchronously from the content root

pub mod error_display;
pub mod picture;
