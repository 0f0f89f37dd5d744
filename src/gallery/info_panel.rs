// SPDX-License-Identifier: MPL-2.0
//! Project info side panel shown over the viewer.

use super::component::Message;
use crate::catalog::ProjectRecord;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{scrollable, Column, Container, Text};
use iced::{Element, Length};

/// Resolved text for the info panel.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoSheet {
    pub title: String,
    /// `(label, value)` pairs: location, period, address.
    pub facts: Vec<(String, String)>,
    pub description_label: String,
    pub paragraphs: Vec<String>,
    pub team_label: String,
    /// `(role, name)` pairs, empty names omitted.
    pub team: Vec<(String, String)>,
}

impl InfoSheet {
    pub fn from_record(record: &ProjectRecord, i18n: &I18n) -> Self {
        let facts = vec![
            (i18n.tr("viewer-location"), record.location.clone()),
            (i18n.tr("viewer-period"), record.period.clone()),
            (i18n.tr("viewer-address"), record.address.clone()),
        ];

        let team = [
            ("viewer-team-architect", &record.team.architect),
            ("viewer-team-client", &record.team.client),
            ("viewer-team-contractor", &record.team.contractor),
        ]
        .into_iter()
        .filter(|(_, name)| !name.trim().is_empty())
        .map(|(key, name)| (i18n.tr(key), name.clone()))
        .collect();

        Self {
            title: record.title.clone(),
            facts,
            description_label: i18n.tr("viewer-description"),
            paragraphs: paragraphs(&record.description),
            team_label: i18n.tr("viewer-team"),
            team,
        }
    }

    pub fn view<'a>(self) -> Element<'a, Message> {
        let mut content = Column::new()
            .spacing(spacing::LG)
            .push(Text::new(self.title).size(typography::TITLE_MD));

        for (label, value) in self.facts {
            content = content.push(field(label, value));
        }

        let description = self.paragraphs.into_iter().fold(
            Column::new().spacing(spacing::SM).push(section_label(self.description_label)),
            |column, paragraph| column.push(Text::new(paragraph).size(typography::BODY)),
        );
        content = content.push(description);

        if !self.team.is_empty() {
            let team = self.team.into_iter().fold(
                Column::new().spacing(spacing::SM).push(section_label(self.team_label)),
                |column, (role, name)| column.push(field(role, name)),
            );
            content = content.push(team);
        }

        Container::new(scrollable(content.padding(spacing::XL)))
            .width(Length::Fixed(sizing::INFO_PANEL_WIDTH))
            .height(Length::Fill)
            .style(styles::container::side_panel)
            .into()
    }
}

/// Splits a description into paragraphs: one per non-blank line.
#[must_use]
pub fn paragraphs(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn section_label<'a>(label: String) -> Element<'a, Message> {
    Text::new(label.to_uppercase())
        .size(typography::LABEL)
        .color(palette::GRAY_500)
        .into()
}

fn field<'a>(label: String, value: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(section_label(label))
        .push(Text::new(value).size(typography::BODY))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ImageRef, Team};
    use crate::i18n::Locale;

    fn record() -> ProjectRecord {
        ProjectRecord {
            id: 4,
            title: "Heritage Restoration".into(),
            location: "Izmir".into(),
            period: "2022–2023".into(),
            challenge: "Ahead of schedule".into(),
            address: "Kemeraltı".into(),
            description: "First paragraph.\n\n  Second paragraph.\nThird.".into(),
            images: vec![ImageRef::new("a.jpg")],
            team: Team {
                architect: "C. Karakaya".into(),
                client: String::new(),
                contractor: "Atölye".into(),
            },
        }
    }

    #[test]
    fn paragraphs_skip_blank_lines() {
        assert_eq!(
            paragraphs("First paragraph.\n\n  Second paragraph.\nThird."),
            ["First paragraph.", "Second paragraph.", "Third."]
        );
        assert!(paragraphs("   \n").is_empty());
    }

    #[test]
    fn sheet_resolves_labels_and_omits_empty_roles() {
        let i18n = I18n::from_sources(
            &[(
                Locale::En,
                "viewer-address = Address\nviewer-team-architect = Architect\n",
            )],
            Locale::En,
        );
        let sheet = InfoSheet::from_record(&record(), &i18n);

        assert_eq!(sheet.title, "Heritage Restoration");
        assert_eq!(sheet.facts[2], ("Address".to_string(), "Kemeraltı".to_string()));
        assert_eq!(sheet.paragraphs.len(), 3);
        assert_eq!(
            sheet.team,
            vec![
                ("Architect".to_string(), "C. Karakaya".to_string()),
                ("viewer-team-contractor".to_string(), "Atölye".to_string()),
            ]
        );
    }
}
