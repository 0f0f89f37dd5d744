// SPDX-License-Identifier: MPL-2.0
//! Position indicator: `01 / 05` counter and one marker per image.

use super::component::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, tooltip, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// Counter text with both numbers zero-padded to two digits.
pub fn counter_label(i18n: &I18n, index: usize, count: usize) -> String {
    i18n.tr_with_args(
        "viewer-counter",
        &[
            ("current", format!("{:02}", index + 1)),
            ("total", format!("{count:02}")),
        ],
    )
}

/// Marker width for image `i` when `current` is shown.
#[must_use]
pub fn marker_width(i: usize, current: usize) -> f32 {
    if i == current {
        sizing::MARKER_ACTIVE_WIDTH
    } else {
        sizing::MARKER_WIDTH
    }
}

pub fn counter<'a>(i18n: &I18n, index: usize, count: usize) -> Element<'a, Message> {
    Text::new(counter_label(i18n, index, count))
        .size(typography::BODY)
        .into()
}

/// Row of markers; clicking marker `i` jumps to image `i` when `enabled`.
pub fn markers<'a>(i18n: &I18n, current: usize, count: usize, enabled: bool) -> Element<'a, Message> {
    let markers = (0..count).map(|i| {
        let marker = button(
            Space::new()
                .width(Length::Fixed(marker_width(i, current)))
                .height(Length::Fixed(sizing::MARKER_HEIGHT)),
        )
        .padding(0)
        .style(styles::button::marker(i == current))
        .on_press_maybe(enabled.then_some(Message::JumpTo(i)));

        let label = i18n.tr_with_args("viewer-go-to-image", &[("index", (i + 1).to_string())]);
        tooltip(
            marker,
            Text::new(label).size(typography::LABEL),
            tooltip::Position::Top,
        )
        .into()
    });

    Row::with_children(markers)
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .into()
}
