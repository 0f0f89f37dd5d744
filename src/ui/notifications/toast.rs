// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::{Manager, Message, Notification};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

fn toast<'a>(notification: &Notification, i18n: &I18n) -> Element<'a, Message> {
    let dismiss = button(Text::new("✕").size(typography::BODY))
        .padding(spacing::XXS)
        .style(styles::button::ghost)
        .on_press(Message::Dismiss(notification.id()));

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(i18n.tr(notification.message_key())).size(typography::BODY))
                .width(Length::Fill),
        )
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::toast(notification.severity().color()))
        .into()
}

/// Visible toasts stacked in the bottom-right corner.
pub fn view_overlay<'a>(manager: &Manager, i18n: &I18n) -> Element<'a, Message> {
    let toasts: Vec<Element<'a, Message>> = manager.visible().map(|n| toast(n, i18n)).collect();

    if toasts.is_empty() {
        return Space::new().into();
    }

    Container::new(
        Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(Horizontal::Right),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Bottom)
    .padding(spacing::MD)
    .into()
}
