// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors, including the per-theme reading surfaces
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use comprehension_reader::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let focus_ring = Color {
    a: opacity::FOCUS_RING,
    ..palette::PRIMARY_400
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_50: Color = Color::from_rgb(0.96, 0.96, 0.96);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Sepia reading surface
    pub const SEPIA_PAPER: Color = Color::from_rgb(0.96, 0.91, 0.8);
    pub const SEPIA_INK: Color = Color::from_rgb(0.36, 0.25, 0.16);
    pub const SEPIA_ACCENT: Color = Color::from_rgb(0.6, 0.4, 0.2);

    // High contrast
    pub const CONTRAST_YELLOW: Color = Color::from_rgb(1.0, 0.9, 0.0);
    pub const CONTRAST_CYAN: Color = Color::from_rgb(0.0, 1.0, 1.0);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const FOCUS_RING: f32 = 0.9;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const LIST_ENTRY_HEIGHT: f32 = 44.0;

    /// Reading column width; long lines are hard to follow.
    pub const CONTENT_MAX_WIDTH: f32 = 760.0;

    /// Passage pictures never grow taller than this.
    pub const PICTURE_MAX_HEIGHT: f32 = 520.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: Large headings (view titles, passage titles)
    //! - Body: Passage text and controls
    //! - Caption: Diagnostics and hints

    /// Large title - View headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Passage title, question number
    pub const TITLE_MD: f32 = 20.0;

    /// Large body - Passage text and question prompts
    pub const BODY_LG: f32 = 18.0;

    /// Standard body - Labels and buttons
    pub const BODY: f32 = 14.0;

    /// Caption - Diagnostics
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Error accents
    pub const WIDTH_MD: f32 = 2.0;

    /// Focus ring around the keyboard-focused control
    pub const WIDTH_FOCUS: f32 = 3.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::LIST_ENTRY_HEIGHT > sizing::BUTTON_HEIGHT);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Radius validation
    assert!(radius::LG > radius::SM);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(border::WIDTH_FOCUS > border::WIDTH_MD);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
