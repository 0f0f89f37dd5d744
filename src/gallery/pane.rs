// SPDX-License-Identifier: MPL-2.0
//! Full-window viewer layout: header, sliding image with pointer hit zones,
//! position indicator and the optional info panel.

use super::component::Message;
use super::indicator;
use super::info_panel::InfoSheet;
use super::navigation::Direction;
use crate::catalog::ProjectRecord;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length, Padding,
};
use std::path::Path;

const CLOSE_LABEL_KEY: &str = "viewer-close";

/// What the pane needs to know about the current image.
pub struct Slide<'a> {
    pub record: &'a ProjectRecord,
    pub index: usize,
    pub count: usize,
    /// Direction of the running transition, `None` when idle.
    pub direction: Direction,
    /// Eased transition progress, `1.0` when idle.
    pub progress: f32,
    /// False while the info panel is open.
    pub navigation_enabled: bool,
}

impl Slide<'_> {
    /// Horizontal offset of the entering image; positive means shifted right.
    #[must_use]
    pub fn offset(&self) -> f32 {
        (1.0 - self.progress) * sizing::SLIDE_DISTANCE * self.direction.sign()
    }
}

pub fn view<'a>(
    i18n: &'a I18n,
    image_root: &'a Path,
    slide: Slide<'a>,
    info: Option<InfoSheet>,
) -> Element<'a, Message> {
    let info_open = info.is_some();

    let main = Column::new()
        .push(header(i18n, slide.record, info_open))
        .push(image_area(i18n, image_root, &slide))
        .push(footer(i18n, &slide))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layout = Row::new().push(main);
    if let Some(sheet) = info {
        layout = layout.push(sheet.view());
    }

    Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::surface)
        .into()
}

fn header<'a>(i18n: &I18n, record: &'a ProjectRecord, info_open: bool) -> Element<'a, Message> {
    let heading = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(record.title.as_str()).size(typography::TITLE_MD))
        .push(
            Text::new(format!("{} — {}", record.location, record.period))
                .size(typography::BODY)
                .color(palette::GRAY_500),
        );

    let info_label = if info_open {
        i18n.tr("viewer-hide-info")
    } else {
        i18n.tr("viewer-info")
    };
    let info_button = button(Text::new(info_label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::ghost)
        .on_press(Message::ToggleInfo);
    let close_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new("✕").size(typography::TITLE_MD))
            .push(Text::new(i18n.tr(CLOSE_LABEL_KEY)).size(typography::BODY)),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::ghost)
    .on_press(Message::Close);

    Row::new()
        .push(heading)
        .push(Space::new().width(Length::Fill))
        .push(info_button)
        .push(close_button)
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .padding([spacing::MD, spacing::LG])
        .into()
}

fn image_area<'a>(i18n: &I18n, image_root: &Path, slide: &Slide<'a>) -> Element<'a, Message> {
    let offset = slide.offset();
    let picture: Element<'a, Message> = match slide.record.images.get(slide.index) {
        Some(reference) => image(image::Handle::from_path(reference.resolve(image_root)))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .opacity(slide.progress)
            .into(),
        None => Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::image_well)
            .into(),
    };
    let picture = Container::new(picture)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: 0.0,
            right: (-offset).max(0.0),
            bottom: 0.0,
            left: offset.max(0.0),
        });

    Stack::new()
        .push(picture)
        .push(hit_zones(slide.navigation_enabled))
        .push(arrows(i18n, slide.navigation_enabled))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Invisible left and right thirds of the image area.
fn hit_zones<'a>(enabled: bool) -> Element<'a, Message> {
    let zone = |message: Message| {
        let area = mouse_area(
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fill),
        );
        let area = if enabled { area.on_press(message) } else { area };
        Container::new(area)
            .width(Length::FillPortion(1))
            .height(Length::Fill)
    };

    Row::new()
        .push(zone(Message::Previous))
        .push(Space::new().width(Length::FillPortion(1)))
        .push(zone(Message::Next))
        .height(Length::Fill)
        .into()
}

fn arrows<'a>(i18n: &I18n, enabled: bool) -> Element<'a, Message> {
    let arrow = |glyph: &'static str, message: Message| {
        button(Text::new(glyph).size(typography::TITLE_LG))
            .padding(spacing::SM)
            .style(styles::button::ghost)
            .on_press_maybe(enabled.then_some(message))
    };

    let previous = Column::new()
        .push(arrow("‹", Message::Previous))
        .push(Text::new(i18n.tr("viewer-previous")).size(typography::LABEL))
        .align_x(Horizontal::Center);
    let next = Column::new()
        .push(arrow("›", Message::Next))
        .push(Text::new(i18n.tr("viewer-next")).size(typography::LABEL))
        .align_x(Horizontal::Center);

    Row::new()
        .push(previous)
        .push(Space::new().width(Length::Fill))
        .push(next)
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .into()
}

fn footer<'a>(i18n: &I18n, slide: &Slide<'a>) -> Element<'a, Message> {
    let challenge = Column::new()
        .spacing(spacing::XXS)
        .width(Length::FillPortion(1))
        .push(
            Text::new(i18n.tr("gallery-challenge").to_uppercase())
                .size(typography::LABEL)
                .color(palette::GRAY_500),
        )
        .push(Text::new(slide.record.challenge.as_str()).size(typography::BODY));

    let markers = Container::new(indicator::markers(
        i18n,
        slide.index,
        slide.count,
        slide.navigation_enabled,
    ))
    .width(Length::FillPortion(2))
    .align_x(Horizontal::Center);

    Row::new()
        .push(
            Container::new(indicator::counter(i18n, slide.index, slide.count))
                .width(Length::FillPortion(1)),
        )
        .push(markers)
        .push(challenge)
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .padding([spacing::MD, spacing::LG])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ImageRef, Team};
    use crate::i18n::Locale;

    fn record() -> ProjectRecord {
        ProjectRecord {
            id: 1,
            title: "T".into(),
            location: "L".into(),
            period: "P".into(),
            challenge: "C".into(),
            address: "A".into(),
            description: "D".into(),
            images: vec![ImageRef::new("a.jpg"), ImageRef::new("b.jpg")],
            team: Team::default(),
        }
    }

    fn slide(record: &ProjectRecord, direction: Direction, progress: f32) -> Slide<'_> {
        Slide {
            record,
            index: 1,
            count: 2,
            direction,
            progress,
            navigation_enabled: true,
        }
    }

    #[test]
    fn forward_slide_enters_from_the_right() {
        let record = record();
        assert!(slide(&record, Direction::Forward, 0.0).offset() > 0.0);
        assert!(slide(&record, Direction::Backward, 0.0).offset() < 0.0);
    }

    #[test]
    fn settled_slide_has_no_offset() {
        let record = record();
        assert_eq!(slide(&record, Direction::Forward, 1.0).offset(), 0.0);
        assert_eq!(slide(&record, Direction::None, 0.3).offset(), 0.0);
    }

    #[test]
    fn close_button_label_is_translated() {
        let mut i18n = I18n::default();
        assert_eq!(i18n.tr(CLOSE_LABEL_KEY), "Close");
        i18n.set_locale(Locale::Tr);
        assert_eq!(i18n.tr(CLOSE_LABEL_KEY), "Kapat");
    }
}
