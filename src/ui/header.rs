// SPDX-License-Identifier: MPL-2.0
//! Site header: brand, page navigation and the language switcher.

use crate::app::Screen;
use crate::i18n::{I18n, Locale};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Navigate(Screen),
    SelectLocale(Locale),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Navigate(Screen),
    SelectLocale(Locale),
}

/// Navigation entries in display order.
pub const NAV_ITEMS: [(Screen, &str); 4] = [
    (Screen::Home, "nav-projects"),
    (Screen::About, "nav-about"),
    (Screen::Media, "nav-media"),
    (Screen::Contact, "nav-contact"),
];

#[must_use]
pub fn update(message: Message, current_locale: Locale) -> Event {
    match message {
        Message::Navigate(screen) => Event::Navigate(screen),
        Message::SelectLocale(locale) if locale == current_locale => Event::None,
        Message::SelectLocale(locale) => Event::SelectLocale(locale),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(Text::new(ctx.i18n.tr("brand-name")).size(typography::TITLE_SM))
        .padding(0)
        .style(styles::button::link(true))
        .on_press(Message::Navigate(Screen::Home));

    let nav = NAV_ITEMS.iter().fold(
        Row::new().spacing(spacing::LG).align_y(Vertical::Center),
        |row, (screen, key)| {
            row.push(
                button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
                    .padding(0)
                    .style(styles::button::link(*screen == ctx.screen))
                    .on_press(Message::Navigate(*screen)),
            )
        },
    );

    let current = ctx.i18n.current_locale();
    let switcher = Locale::ALL.iter().fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |row, locale| {
            row.push(
                button(Text::new(locale.switcher_label()).size(typography::LABEL))
                    .padding(0)
                    .style(styles::button::link(*locale == current))
                    .on_press(Message::SelectLocale(*locale)),
            )
        },
    );

    let bar = Row::new()
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(nav)
        .push(switcher)
        .spacing(spacing::XL)
        .align_y(Vertical::Center)
        .padding([0.0, spacing::XL]);

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::surface)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_is_forwarded() {
        assert_eq!(
            update(Message::Navigate(Screen::Media), Locale::En),
            Event::Navigate(Screen::Media)
        );
    }

    #[test]
    fn selecting_the_active_locale_is_ignored() {
        assert_eq!(update(Message::SelectLocale(Locale::En), Locale::En), Event::None);
        assert_eq!(
            update(Message::SelectLocale(Locale::Tr), Locale::En),
            Event::SelectLocale(Locale::Tr)
        );
    }

    #[test]
    fn nav_keys_are_translated() {
        let i18n = I18n::default();
        for (_, key) in NAV_ITEMS {
            for locale in Locale::ALL {
                assert!(i18n.has_message(locale, key), "{key} missing for {locale}");
            }
        }
    }
}
