// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, INK, PAPER},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Solid ink button for the main call to action.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::GRAY_700,
        button::Status::Disabled => palette::GRAY_300,
        button::Status::Active | button::Status::Pressed => INK,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: PAPER,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only button used for navigation links. The active link is drawn in
/// full ink, the others muted.
pub fn link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match (active, status) {
            (true, _) | (false, button::Status::Hovered) => INK,
            _ => palette::GRAY_500,
        };
        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless control on the viewer surface (close, info, arrows).
pub fn ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette::GRAY_100))
        }
        _ => None,
    };
    button::Style {
        background,
        text_color: INK,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Position indicator marker; the current image's marker is solid ink.
pub fn marker(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match (active, status) {
            (true, _) => opacity::OPAQUE,
            (false, button::Status::Hovered) => 0.4,
            _ => opacity::SUBTLE,
        };
        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..INK })),
            text_color: INK,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Invisible button wrapping a whole project card.
pub fn card(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: INK,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_marker_is_opaque() {
        let theme = Theme::Light;
        let active = marker(true)(&theme, button::Status::Active);
        let idle = marker(false)(&theme, button::Status::Active);
        let Some(Background::Color(active)) = active.background else {
            panic!("marker has a background");
        };
        let Some(Background::Color(idle)) = idle.background else {
            panic!("marker has a background");
        };
        assert!(active.a > idle.a);
    }

    #[test]
    fn active_link_uses_ink() {
        let style = link(true)(&Theme::Light, button::Status::Active);
        assert_eq!(style.text_color, INK);
        let style = link(false)(&Theme::Light, button::Status::Active);
        assert_ne!(style.text_color, INK);
    }
}
