// SPDX-License-Identifier: MPL-2.0
//! Landing page: hero text and the project grid.

use crate::catalog::{Catalog, CatalogEntry};
use crate::i18n::I18n;
use crate::ui::components;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{ContentFit, Element, Length};
use std::path::Path;

/// Number of columns in the project grid.
pub const GRID_COLUMNS: usize = 3;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub image_root: &'a Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenProject(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    OpenProject(u32),
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenProject(id) => Event::OpenProject(id),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let hero = Column::new()
        .spacing(spacing::MD)
        .push(components::eyebrow(ctx.i18n.tr("hero-project-count")))
        .push(Text::new(ctx.i18n.tr("hero-title")).size(typography::DISPLAY))
        .push(
            Text::new(ctx.i18n.tr("hero-subtitle"))
                .size(typography::BODY_LG)
                .color(palette::GRAY_700),
        );

    let grid = ctx.catalog.columns(GRID_COLUMNS).into_iter().fold(
        Row::new().spacing(spacing::LG),
        |row, entries| {
            let column = entries.into_iter().fold(
                Column::new().spacing(spacing::XXL).width(Length::FillPortion(1)),
                |column, entry| column.push(card(ctx.i18n, ctx.image_root, entry)),
            );
            row.push(column)
        },
    );

    components::page(
        Column::new()
            .spacing(spacing::SECTION)
            .push(hero)
            .push(grid),
    )
}

fn card<'a>(i18n: &I18n, image_root: &Path, entry: &CatalogEntry) -> Element<'a, Message> {
    let thumbnail = Container::new(
        image(image::Handle::from_path(entry.thumbnail.resolve(image_root)))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(entry.aspect.card_height()))
    .style(styles::container::image_well);

    let meta = |label_key: &str, value: String| {
        Column::new()
            .spacing(spacing::XXS)
            .push(components::eyebrow(i18n.tr(label_key)))
            .push(Text::new(value).size(typography::BODY))
    };

    let details = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr(&entry.key("title"))).size(typography::TITLE_MD))
        .push(
            Row::new()
                .spacing(spacing::LG)
                .push(meta("gallery-location", i18n.tr(&entry.key("location"))))
                .push(meta("gallery-year", entry.period.clone())),
        )
        .push(meta("gallery-challenge", i18n.tr(&entry.key("challenge"))))
        .push(
            Text::new(format!("{} →", i18n.tr("gallery-view-project")))
                .size(typography::BODY)
                .color(palette::STONE_500),
        );

    button(
        Column::new()
            .spacing(spacing::MD)
            .push(thumbnail)
            .push(details),
    )
    .padding(0)
    .width(Length::Fill)
    .style(styles::button::card)
    .on_press(Message::OpenProject(entry.id))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_click_opens_project() {
        assert_eq!(update(Message::OpenProject(3)), Event::OpenProject(3));
    }

    #[test]
    fn grid_places_first_projects_side_by_side() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        let columns = catalog.columns(GRID_COLUMNS);
        let first_row: Vec<u32> = columns.iter().map(|column| column[0].id).collect();
        assert_eq!(first_row, [1, 2, 3]);
    }

    #[test]
    fn view_builds_with_embedded_catalog() {
        let i18n = I18n::default();
        let catalog = Catalog::embedded().expect("embedded catalog");
        let _element = view(ViewContext {
            i18n: &i18n,
            catalog: &catalog,
            image_root: Path::new("public"),
        });
    }
}
