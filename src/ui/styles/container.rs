// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Reading surface for passages and questions.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so the panel follows whichever reading theme is selected.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        text_color: Some(palette.background.weak.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Inline error message framed in the danger color.
pub fn error(theme: &Theme) -> container::Style {
    let danger = theme.extended_palette().danger.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..danger
        })),
        text_color: Some(theme.extended_palette().background.base.text),
        border: Border {
            color: danger,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
