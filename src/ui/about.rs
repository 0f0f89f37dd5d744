// SPDX-License-Identifier: MPL-2.0
//! About page: biography, figures, philosophy, expertise and career timeline.

use crate::i18n::I18n;
use crate::ui::components;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Headline figures and their label keys.
pub const STATS: [(&str, &str); 4] = [
    ("5+", "stats-years-exp"),
    ("20+", "stats-projects"),
    ("98%", "stats-on-time"),
    ("15%", "stats-savings"),
];

pub const EXPERTISE: [&str; 6] = [
    "expertise-residential",
    "expertise-commercial",
    "expertise-interior",
    "expertise-project-mgmt",
    "expertise-heritage",
    "expertise-sustainable",
];

/// `(year, title key, description key)`, newest first.
pub const TIMELINE: [(&str, &str, &str); 4] = [
    ("2024", "timeline-2024-title", "timeline-2024-desc"),
    ("2020", "timeline-2020-title", "timeline-2020-desc"),
    ("2018", "timeline-2018-title", "timeline-2018-desc"),
    ("2016", "timeline-2016-title", "timeline-2016-desc"),
];

/// Contextual data needed to render the about page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    GetInTouch,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenContact,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::GetInTouch => Event::OpenContact,
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let content = Column::new()
        .spacing(spacing::SECTION)
        .push(build_bio(i18n))
        .push(build_stats(i18n))
        .push(build_philosophy(i18n))
        .push(build_expertise(i18n))
        .push(build_timeline(i18n));

    components::page(content)
}

fn build_bio<'a>(i18n: &I18n) -> Element<'a, Message> {
    let paragraph = |key: &str| {
        Text::new(i18n.tr(key))
            .size(typography::BODY_LG)
            .color(palette::GRAY_700)
    };

    let get_in_touch = button(Text::new(i18n.tr("about-get-in-touch")).size(typography::BODY))
        .padding(0)
        .style(styles::button::link(true))
        .on_press(Message::GetInTouch);

    Column::new()
        .spacing(spacing::LG)
        .max_width(720.0)
        .push(components::eyebrow(i18n.tr("about-label")))
        .push(Text::new(i18n.tr("about-name")).size(typography::DISPLAY))
        .push(paragraph("about-bio1"))
        .push(paragraph("about-bio2"))
        .push(get_in_touch)
        .into()
}

fn build_stats<'a>(i18n: &I18n) -> Element<'a, Message> {
    let row = STATS.iter().fold(Row::new().spacing(spacing::XL), |row, (value, key)| {
        row.push(
            Column::new()
                .spacing(spacing::XS)
                .width(Length::FillPortion(1))
                .align_x(Horizontal::Center)
                .push(Text::new(*value).size(typography::DISPLAY))
                .push(components::eyebrow(i18n.tr(key))),
        )
    });

    Column::new()
        .spacing(spacing::XXL)
        .push(components::rule())
        .push(row)
        .push(components::rule())
        .into()
}

fn build_philosophy<'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .max_width(760.0)
            .push(components::eyebrow(i18n.tr("about-philosophy")))
            .push(
                Text::new(i18n.tr("about-quote")).size(typography::TITLE_LG),
            ),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}

fn build_expertise<'a>(i18n: &I18n) -> Element<'a, Message> {
    let items = EXPERTISE.chunks(2).fold(Column::new().spacing(spacing::MD), |column, pair| {
        let row = pair.iter().fold(Row::new().spacing(spacing::XL), |row, key| {
            row.push(
                Text::new(format!("— {}", i18n.tr(key)))
                    .size(typography::BODY_LG)
                    .width(Length::FillPortion(1)),
            )
        });
        column.push(row)
    });

    Column::new()
        .spacing(spacing::XL)
        .push(components::section_heading(
            i18n.tr("about-expertise"),
            i18n.tr("about-expertise-title"),
        ))
        .push(items)
        .into()
}

fn build_timeline<'a>(i18n: &I18n) -> Element<'a, Message> {
    let entries = TIMELINE.iter().fold(
        Column::new().spacing(spacing::LG),
        |column, (year, title_key, desc_key)| {
            let entry = Row::new()
                .spacing(spacing::XL)
                .push(
                    Text::new(*year)
                        .size(typography::TITLE_SM)
                        .color(palette::STONE_500)
                        .width(Length::Fixed(96.0)),
                )
                .push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(Text::new(i18n.tr(title_key)).size(typography::TITLE_SM))
                        .push(
                            Text::new(i18n.tr(desc_key))
                                .size(typography::BODY)
                                .color(palette::GRAY_700),
                        ),
                );
            column.push(components::rule()).push(entry)
        },
    );

    Column::new()
        .spacing(spacing::XL)
        .push(components::eyebrow(i18n.tr("about-journey")))
        .push(entries)
        .into()
}
