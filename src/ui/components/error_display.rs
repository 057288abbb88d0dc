// SPDX-License-Identifier: MPL-2.0
//! Inline error message shown in place of the content that failed.
//!
//! Every data problem in the reader (missing manifest, broken passage,
//! malformed question) is reported as a message substituted into the view
//! region it affects. This component gives those messages one look.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
//!
//! ErrorDisplay::new(ErrorSeverity::Error)
//!     .message(i18n.tr("list-error-manifest-unavailable"))
//!     .details("I/O error: data/manifest.json: No such file or directory")
//!     .view()
//! ```

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{text, Column, Container, Text};
use iced::{Color, Element, Length, Theme};

/// Severity level determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    /// The content could not be shown.
    #[default]
    Error,
    /// The content is degraded (some files skipped, empty catalog).
    Warning,
}

impl ErrorSeverity {
    /// Returns the accent color for this severity in `theme`.
    pub fn color(self, theme: &Theme) -> Color {
        let palette = theme.extended_palette();
        match self {
            ErrorSeverity::Error => palette.danger.base.color,
            ErrorSeverity::Warning => palette.warning.base.color,
        }
    }
}

/// Builder for an inline error message.
#[derive(Debug, Clone, Default)]
pub struct ErrorDisplay {
    severity: ErrorSeverity,
    message: Option<String>,
    details: Vec<String>,
}

impl ErrorDisplay {
    /// Creates a new error display with the given severity.
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Sets the user-facing message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds one line of technical detail, shown in a smaller font.
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details.push(details.into());
        self
    }

    /// Renders the message.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let severity = self.severity;
        let mut content = Column::new().spacing(spacing::XS).width(Length::Fill);

        if let Some(message) = self.message {
            content = content.push(Text::new(message).size(typography::BODY_LG).style(
                move |theme: &Theme| text::Style {
                    color: Some(severity.color(theme)),
                },
            ));
        }

        for line in self.details {
            content = content.push(Text::new(line).size(typography::CAPTION));
        }

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(container_styles::error)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_severity_colors_are_distinct() {
        let theme = Theme::Light;
        assert_ne!(
            ErrorSeverity::Error.color(&theme),
            ErrorSeverity::Warning.color(&theme)
        );
    }

    #[test]
    fn error_display_builder_collects_details() {
        let display = ErrorDisplay::new(ErrorSeverity::Warning)
            .message("No valid comprehensions found.")
            .details("a.json: JSON data is not an array.")
            .details("b.json: HTTP error! status: 404");

        assert_eq!(display.severity, ErrorSeverity::Warning);
        assert_eq!(
            display.message.as_deref(),
            Some("No valid comprehensions found.")
        );
        assert_eq!(display.details.len(), 2);
    }

    #[test]
    fn default_severity_is_error() {
        assert_eq!(ErrorDisplay::default().severity, ErrorSeverity::Error);
    }
}
