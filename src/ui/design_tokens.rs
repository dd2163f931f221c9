// SPDX-License-Identifier: MPL-2.0
//! Design tokens: the palette, spacing, sizing, typography, radius, and
//! shadow scales every view draws from. Keep components on these tokens
//! rather than ad-hoc values so spacing and color stay consistent.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.09, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.28, 0.28, 0.33);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.52);
    pub const GRAY_200: Color = Color::from_rgb(0.74, 0.74, 0.78);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.88, 0.9);

    // Brand colors (indigo scale)
    pub const PRIMARY_200: Color = Color::from_rgb(0.78, 0.8, 0.98);
    pub const PRIMARY_400: Color = Color::from_rgb(0.51, 0.55, 0.96);
    pub const PRIMARY_500: Color = Color::from_rgb(0.39, 0.4, 0.95);
    pub const PRIMARY_600: Color = Color::from_rgb(0.31, 0.28, 0.9);
    pub const PRIMARY_700: Color = Color::from_rgb(0.26, 0.22, 0.79);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.9;

    /// Surface background for semi-transparent panels.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    /// Style-set preview thumbnails (square).
    pub const THUMBNAIL: f32 = 96.0;
    /// Subject preview (square).
    pub const CONTENT_PREVIEW: f32 = 128.0;
    /// Longest edge of the generated icon preview.
    pub const RESULT_MAX: f32 = 320.0;
    /// Fixed width of toast notifications.
    pub const TOAST_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const TITLE_SM: f32 = 16.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_LG: f32 = 24.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector { x: 0.0, y: 0.0 },
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.2,
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.3,
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 8.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_monotonic() {
        assert!(spacing::XXS < spacing::XS);
        assert!(spacing::XS < spacing::SM);
        assert!(spacing::SM < spacing::MD);
        assert!(spacing::MD < spacing::LG);
        assert!(spacing::LG < spacing::XL);
    }

    #[test]
    fn semantic_colors_are_distinct() {
        assert_ne!(palette::ERROR_500, palette::WARNING_500);
        assert_ne!(palette::WARNING_500, palette::SUCCESS_500);
        assert_ne!(palette::SUCCESS_500, palette::INFO_500);
    }

    #[test]
    fn typography_scale_is_monotonic() {
        assert!(typography::CAPTION < typography::BODY);
        assert!(typography::BODY < typography::TITLE_SM);
        assert!(typography::TITLE_SM < typography::TITLE_MD);
        assert!(typography::TITLE_MD < typography::TITLE_LG);
    }
}
