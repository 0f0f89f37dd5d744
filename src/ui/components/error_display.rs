// SPDX-License-Identifier: MPL-2.0
//! Inline error block with a severity-colored accent.
//!
//! ```ignore
//! ErrorDisplay::new(palette::ERROR_500)
//!     .message(i18n.tr(error.i18n_key()))
//!     .details(error.detail())
//!     .view()
//! ```

use crate::ui::design_tokens::{border, palette, spacing, typography};
use iced::widget::{container, Column, Container, Text};
use iced::{Background, Border, Color, Element, Length, Theme};

#[derive(Debug, Clone, Default)]
pub struct ErrorDisplay {
    accent: Color,
    message: Option<String>,
    details: Option<String>,
}

impl ErrorDisplay {
    pub fn new(accent: Color) -> Self {
        Self {
            accent,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Secondary line, typically the text returned by a remote service.
    #[must_use]
    pub fn details(mut self, details: Option<&str>) -> Self {
        self.details = details.map(str::to_string);
        self
    }

    pub fn view<'a, M: 'a>(self) -> Element<'a, M> {
        let mut content = Column::new().spacing(spacing::XXS);
        if let Some(message) = self.message {
            content = content.push(Text::new(message).size(typography::BODY).color(self.accent));
        }
        if let Some(details) = self.details {
            content = content.push(
                Text::new(details)
                    .size(typography::LABEL)
                    .color(palette::GRAY_500),
            );
        }

        let accent = self.accent;
        Container::new(content)
            .width(Length::Fill)
            .padding([spacing::SM, spacing::MD])
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(Color { a: 0.06, ..accent })),
                border: Border {
                    color: accent,
                    width: border::WIDTH_SM,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }
}
