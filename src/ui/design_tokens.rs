// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every page and the gallery viewer.
//!
//! - **Palette**: ink on paper, a warm stone accent, semantic colors
//! - **Opacity**: overlay levels
//! - **Spacing**: 8px grid
//! - **Sizing**: fixed component sizes
//! - **Typography**: font size scale
//! - **Border** / **Radius** / **Shadow**
//!
//! ```
//! use atelier::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let scrim = Color { a: opacity::OVERLAY_STRONG, ..palette::INK };
//! let gap = spacing::MD;
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const INK: Color = Color::from_rgb(0.102, 0.102, 0.102); // #1a1a1a
    pub const PAPER: Color = Color::WHITE;
    pub const BLACK: Color = Color::BLACK;

    // Neutral scale
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_500: Color = Color::from_rgb(0.5, 0.5, 0.5);
    pub const GRAY_300: Color = Color::from_rgb(0.7, 0.7, 0.7);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.953, 0.953);

    /// Warm stone used for section labels and highlights.
    pub const STONE_500: Color = Color::from_rgb(0.553, 0.490, 0.412);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SUBTLE: f32 = 0.2;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
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
    pub const XXL: f32 = 48.0;
    pub const SECTION: f32 = 96.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const HEADER_HEIGHT: f32 = 72.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
    pub const FORM_MAX_WIDTH: f32 = 560.0;

    /// Width of the viewer's info side panel.
    pub const INFO_PANEL_WIDTH: f32 = 380.0;
    /// Distance the entering image travels during a slide.
    pub const SLIDE_DISTANCE: f32 = 120.0;

    // Position indicator markers
    pub const MARKER_WIDTH: f32 = 4.0;
    pub const MARKER_ACTIVE_WIDTH: f32 = 24.0;
    pub const MARKER_HEIGHT: f32 = 4.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero and page titles
    pub const DISPLAY: f32 = 44.0;

    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;

    /// Uppercase section labels
    pub const LABEL: f32 = 11.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 2.0;
    pub const FULL: f32 = 9999.0;
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
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(sizing::MARKER_ACTIVE_WIDTH > sizing::MARKER_WIDTH);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::LABEL);
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
