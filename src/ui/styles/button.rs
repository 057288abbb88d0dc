// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Colors come from the active theme's extended palette so every button
//! follows the reading theme the user picked.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main action of a view (Start Questions, Show Answer, Next, Finish).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette.primary.base.color)),
            text_color: palette.primary.base.text,
            border: Border {
                color: palette.primary.strong.color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette.primary.strong.color)),
            text_color: palette.primary.strong.text,
            border: Border {
                color: palette.primary.base.color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled(theme),
    }
}

/// Secondary actions (Back, Previous) and unselected toggles.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            text_color: palette.background.weak.text,
            border: Border {
                color: palette.background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette.background.strong.color)),
            text_color: palette.background.strong.text,
            border: Border {
                color: palette.primary.base.color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => disabled(theme),
    }
}

/// One row of the comprehension list.
pub fn list_entry(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.weak.color,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.background.base.text,
        border: Border {
            color: palette.background.weak.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Grayed out, non-interactive.
pub fn disabled(theme: &Theme) -> button::Style {
    let palette = theme.extended_palette();

    button::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette.background.strong.color
        })),
        text_color: Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette.background.base.text
        },
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Wraps `base` with a focus ring when `focused` is set.
///
/// Keyboard focus is tracked by the application, not by the widgets, so
/// every focusable button takes its style through this helper.
pub fn focusable(
    base: fn(&Theme, button::Status) -> button::Style,
    focused: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let style = base(theme, status);
        if !focused || status == button::Status::Disabled {
            return style;
        }
        let ring = theme.extended_palette().primary.strong.color;
        button::Style {
            border: Border {
                color: Color {
                    a: opacity::FOCUS_RING,
                    ..ring
                },
                width: border::WIDTH_FOCUS,
                radius: style.border.radius,
            },
            ..style
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_theme_primary_color() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        assert_eq!(
            style.background,
            Some(Background::Color(theme.extended_palette().primary.base.color))
        );
    }

    #[test]
    fn disabled_status_uses_disabled_style() {
        let theme = Theme::Light;
        assert_eq!(
            primary(&theme, button::Status::Disabled).background,
            disabled(&theme).background
        );
        assert_eq!(
            secondary(&theme, button::Status::Disabled).text_color,
            disabled(&theme).text_color
        );
    }

    #[test]
    fn focus_ring_widens_the_border() {
        let theme = Theme::Light;
        let focused = focusable(secondary, true)(&theme, button::Status::Active);
        let plain = focusable(secondary, false)(&theme, button::Status::Active);

        assert_eq!(focused.border.width, border::WIDTH_FOCUS);
        assert_eq!(plain.border.width, border::WIDTH_SM);
        assert_eq!(focused.background, plain.background);
    }

    #[test]
    fn disabled_buttons_show_no_focus_ring() {
        let theme = Theme::Light;
        let style = focusable(primary, true)(&theme, button::Status::Disabled);
        assert_eq!(style.border.width, border::WIDTH_SM);
    }
}
