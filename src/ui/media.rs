// SPDX-License-Identifier: MPL-2.0
//! Media page: press coverage, featured links and videos.

use crate::i18n::I18n;
use crate::ui::components;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{Element, Length};

/// A printed or online feature: `(date key, title key, description key)`.
pub const PRESS: [(&str, &str, &str); 2] = [
    ("media-news1-date", "media-news1-title", "media-news1-desc"),
    ("media-news2-date", "media-news2-title", "media-news2-desc"),
];

/// `(title key, description key, url)`
pub const LINKS: [(&str, &str, &str); 3] = [
    ("media-link1-title", "media-link1-desc", "https://www.archdaily.com"),
    ("media-link2-title", "media-link2-desc", "https://www.dezeen.com"),
    ("media-link3-title", "media-link3-desc", "https://www.instagram.com"),
];

/// `(title key, description key, YouTube video id)`
pub const VIDEOS: [(&str, &str, &str); 1] = [(
    "media-video1-title",
    "media-video1-desc",
    "XoDxGdQqzeU",
)];

#[must_use]
pub fn youtube_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

/// Contextual data needed to render the media page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Index into [`LINKS`].
    OpenLink(usize),
    /// Index into [`VIDEOS`].
    PlayVideo(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenUrl(String),
}

#[must_use]
pub fn update(message: Message) -> Event {
    let url = match message {
        Message::OpenLink(index) => LINKS.get(index).map(|(_, _, url)| (*url).to_string()),
        Message::PlayVideo(index) => VIDEOS.get(index).map(|(_, _, id)| youtube_url(id)),
    };
    url.map_or(Event::None, Event::OpenUrl)
}

pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let header = Column::new()
        .spacing(spacing::MD)
        .push(components::eyebrow(i18n.tr("media-label")))
        .push(Text::new(i18n.tr("media-title")).size(typography::DISPLAY))
        .push(
            Text::new(i18n.tr("media-subtitle"))
                .size(typography::BODY_LG)
                .color(palette::GRAY_700),
        );

    let press = PRESS.iter().fold(
        Column::new().spacing(spacing::XL),
        |column, (date, title, desc)| {
            column.push(components::rule()).push(
                Column::new()
                    .spacing(spacing::SM)
                    .push(components::eyebrow(i18n.tr(date)))
                    .push(Text::new(i18n.tr(title)).size(typography::TITLE_MD))
                    .push(
                        Text::new(i18n.tr(desc))
                            .size(typography::BODY)
                            .color(palette::GRAY_700),
                    ),
            )
        },
    );

    let links = LINKS.iter().enumerate().fold(
        Row::new().spacing(spacing::LG),
        |row, (index, (title, desc, url))| {
            row.push(entry(
                i18n.tr(title),
                i18n.tr(desc),
                (*url).to_string(),
                Message::OpenLink(index),
            ))
        },
    );

    let videos = VIDEOS.iter().enumerate().fold(
        Column::new().spacing(spacing::LG),
        |column, (index, (title, desc, id))| {
            column.push(entry(
                i18n.tr(title),
                i18n.tr(desc),
                youtube_url(id),
                Message::PlayVideo(index),
            ))
        },
    );

    components::page(
        Column::new()
            .spacing(spacing::SECTION)
            .push(header)
            .push(section(i18n.tr("media-news"), press))
            .push(section(i18n.tr("media-links"), links))
            .push(section(i18n.tr("media-videos"), videos)),
    )
}

fn section<'a>(label: String, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XL)
        .push(components::eyebrow(label))
        .push(body)
        .into()
}

fn entry<'a>(
    title: String,
    description: String,
    url: String,
    on_press: Message,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .width(Length::FillPortion(1))
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(
            Text::new(description)
                .size(typography::BODY)
                .color(palette::GRAY_700),
        )
        .push(
            button(Text::new(url).size(typography::LABEL))
                .padding(0)
                .style(styles::button::link(false))
                .on_press(on_press),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn youtube_links_use_watch_urls() {
        assert_eq!(
            youtube_url("XoDxGdQqzeU"),
            "https://www.youtube.com/watch?v=XoDxGdQqzeU"
        );
    }

    #[test]
    fn link_press_resolves_its_url() {
        assert_eq!(
            update(Message::OpenLink(1)),
            Event::OpenUrl("https://www.dezeen.com".into())
        );
        assert_eq!(
            update(Message::PlayVideo(0)),
            Event::OpenUrl("https://www.youtube.com/watch?v=XoDxGdQqzeU".into())
        );
    }

    #[test]
    fn unknown_entry_is_ignored() {
        assert_eq!(update(Message::OpenLink(LINKS.len())), Event::None);
        assert_eq!(update(Message::PlayVideo(VIDEOS.len())), Event::None);
    }

    #[test]
    fn every_entry_is_translated() {
        let i18n = I18n::default();
        let keys = PRESS
            .iter()
            .flat_map(|(a, b, c)| [*a, *b, *c])
            .chain(LINKS.iter().flat_map(|(a, b, _)| [*a, *b]))
            .chain(VIDEOS.iter().flat_map(|(a, b, _)| [*a, *b]));
        for key in keys {
            for locale in Locale::ALL {
                assert!(i18n.has_message(locale, key), "{key} missing for {locale}");
            }
        }
    }
}
