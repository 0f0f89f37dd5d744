// SPDX-License-Identifier: MPL-2.0
//! Building blocks shared by the site pages.
//!
//! - [`error_display`] - inline error block used by the contact form

pub mod error_display;

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Space, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Small uppercase label above a heading or field.
pub fn eyebrow<'a, M: 'a>(label: String) -> Element<'a, M> {
    Text::new(label.to_uppercase())
        .size(typography::LABEL)
        .color(palette::GRAY_500)
        .into()
}

/// Section heading preceded by its eyebrow label.
pub fn section_heading<'a, M: 'a>(label: String, title: String) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::SM)
        .push(eyebrow(label))
        .push(Text::new(title).size(typography::TITLE_LG))
        .into()
}

/// Hairline separator.
pub fn rule<'a, M: 'a>() -> Element<'a, M> {
    Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(styles::container::rule)
        .into()
}

/// Centers page content and caps its width.
pub fn page<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding([spacing::XXL, spacing::XL]),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}
