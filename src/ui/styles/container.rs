// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Plain paper surface behind pages and the viewer.
pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PAPER)),
        text_color: Some(palette::INK),
        ..Default::default()
    }
}

/// Info side panel, separated from the image by a hairline.
pub fn side_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PAPER)),
        text_color: Some(palette::INK),
        border: Border {
            color: palette::GRAY_300,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Placeholder tone behind images that are still loading or missing.
pub fn image_well(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        ..Default::default()
    }
}

/// Horizontal rule between header/footer and content.
pub fn rule(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        ..Default::default()
    }
}

/// Toast card with a severity-colored border.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::PAPER)),
        text_color: Some(palette::INK),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
