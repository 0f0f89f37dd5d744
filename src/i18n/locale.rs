// SPDX-License-Identifier: MPL-2.0
//! Supported display languages.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A display language from the fixed set the site is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    #[default]
    En,
    Tr,
}

impl Locale {
    /// Every supported locale, in switcher order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Tr];

    /// Language code used in config files and asset names.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Tr => "tr",
        }
    }

    /// Short uppercase label shown in the language switcher.
    #[must_use]
    pub fn switcher_label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Tr => "TR",
        }
    }

    /// Fluent language identifier for this locale.
    #[must_use]
    pub fn language_identifier(self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }
}

impl FromStr for Locale {
    type Err = Error;

    /// Accepts any BCP-47 tag whose primary language is supported
    /// (`en`, `en-US`, `tr-TR`...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || Error::UnsupportedLocale(s.to_string());
        let langid: LanguageIdentifier = s.trim().parse().map_err(|_| unsupported())?;
        match langid.language.as_str() {
            "en" => Ok(Locale::En),
            "tr" => Ok(Locale::Tr),
            _ => Err(unsupported()),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_and_regional_codes() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("tr".parse::<Locale>(), Ok(Locale::Tr));
        assert_eq!("tr-TR".parse::<Locale>(), Ok(Locale::Tr));
    }

    #[test]
    fn rejects_unsupported_languages() {
        assert_eq!(
            "de".parse::<Locale>(),
            Err(Error::UnsupportedLocale("de".to_string()))
        );
        assert!("".parse::<Locale>().is_err());
        assert!("not a locale".parse::<Locale>().is_err());
    }

    #[test]
    fn code_round_trips_through_parse() {
        for locale in Locale::ALL {
            assert_eq!(locale.code().parse::<Locale>(), Ok(locale));
        }
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn language_identifier_matches_code() {
        assert_eq!(Locale::Tr.language_identifier().to_string(), "tr");
    }
}
