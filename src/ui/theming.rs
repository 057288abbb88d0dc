// SPDX-License-Identifier: MPL-2.0
//! Maps validated theme names to iced themes.

use crate::theme::{KnownTheme, ThemeName};
use crate::ui::design_tokens::palette;
use iced::theme::Palette;
use iced::{Color, Theme};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub surface: Color,
    pub text: Color,
    pub brand: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
}

impl ColorScheme {
    /// Light theme, used for `theme-default` and any unlisted name.
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::GRAY_50,
            text: palette::GRAY_900,
            brand: palette::PRIMARY_600,
            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_900,
            text: palette::WHITE,
            brand: palette::PRIMARY_400,
            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
        }
    }

    #[must_use]
    pub fn sepia() -> Self {
        Self {
            surface: palette::SEPIA_PAPER,
            text: palette::SEPIA_INK,
            brand: palette::SEPIA_ACCENT,
            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            surface: palette::BLACK,
            text: palette::WHITE,
            brand: palette::CONTRAST_YELLOW,
            error: palette::CONTRAST_CYAN,
            warning: palette::CONTRAST_YELLOW,
            success: palette::CONTRAST_CYAN,
        }
    }

    #[must_use]
    pub fn for_theme(theme: KnownTheme) -> Self {
        match theme {
            KnownTheme::Default => Self::light(),
            KnownTheme::Dark => Self::dark(),
            KnownTheme::Sepia => Self::sepia(),
            KnownTheme::HighContrast => Self::high_contrast(),
        }
    }
}

/// Builds the iced theme drawn for `name`.
#[must_use]
pub fn iced_theme(name: &ThemeName) -> Theme {
    let colors = ColorScheme::for_theme(KnownTheme::for_name(name));
    Theme::custom(
        name.to_string(),
        Palette {
            background: colors.surface,
            text: colors.text,
            primary: colors.brand,
            success: colors.success,
            warning: colors.warning,
            danger: colors.error,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        assert!(ColorScheme::light().surface.r > 0.9);
    }

    #[test]
    fn dark_themes_have_dark_surfaces() {
        assert!(ColorScheme::dark().surface.r < 0.2);
        assert_eq!(ColorScheme::high_contrast().surface, palette::BLACK);
    }

    #[test]
    fn every_known_theme_has_a_distinct_scheme() {
        let schemes: Vec<ColorScheme> = KnownTheme::ALL
            .into_iter()
            .map(ColorScheme::for_theme)
            .collect();
        for (i, a) in schemes.iter().enumerate() {
            for b in &schemes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn iced_theme_uses_the_scheme_of_the_name() {
        let dark = ThemeName::parse("theme-dark").unwrap();
        assert_eq!(
            iced_theme(&dark).extended_palette().background.base.color,
            ColorScheme::dark().surface
        );

        let unlisted = ThemeName::parse("theme-ocean").unwrap();
        assert_eq!(
            iced_theme(&unlisted).extended_palette().background.base.color,
            ColorScheme::light().surface
        );
    }
}
