// SPDX-License-Identifier: MPL-2.0
//! Site footer.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use chrono::Datelike;
use iced::widget::{Container, Text};
use iced::{alignment::Horizontal, Element, Length};

/// `© {year} {brand}. {rights}`
pub fn copyright_line(i18n: &I18n, year: i32) -> String {
    format!(
        "© {year} {}. {}",
        i18n.tr("brand-name"),
        i18n.tr("footer-rights")
    )
}

pub fn view<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    let year = chrono::Local::now().year();
    Container::new(
        Text::new(copyright_line(i18n, year))
            .size(typography::LABEL)
            .color(palette::GRAY_500),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding([spacing::XL, spacing::LG])
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn copyright_line_is_localized() {
        let mut i18n = I18n::default();
        assert_eq!(
            copyright_line(&i18n, 2026),
            "© 2026 Ceylin Karakaya. All Rights Reserved"
        );
        i18n.set_locale(Locale::Tr);
        assert!(copyright_line(&i18n, 2026).ends_with("Tüm Hakları Saklıdır"));
    }
}
