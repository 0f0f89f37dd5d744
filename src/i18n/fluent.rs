// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed translation lookup.

use super::locale::Locale;
use crate::config::Config;
use crate::error::Result;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fmt;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Translation tables for every supported locale plus the current selection.
///
/// Built once at startup and passed by reference to every view that renders
/// user-visible text.
pub struct I18n {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
    current_locale: Locale,
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("current_locale", &self.current_locale)
            .field("loaded", &self.bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Loads the embedded translation files and picks the starting locale:
    /// CLI override, then the persisted preference, then the default.
    pub fn new(cli_lang: Option<&str>, config: &Config) -> Self {
        let mut bundles = HashMap::new();

        for locale in Locale::ALL {
            let filename = format!("{}.ftl", locale.code());
            let Some(content) = Asset::get(&filename) else {
                tracing::warn!(%locale, "no translation file embedded");
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            bundles.insert(locale, build_bundle(locale, source));
        }

        let current_locale = resolve_locale(cli_lang, config).unwrap_or_default();

        Self {
            bundles,
            current_locale,
        }
    }

    /// Builds translation tables from in-memory Fluent sources.
    pub fn from_sources(sources: &[(Locale, &str)], initial: Locale) -> Self {
        let bundles = sources
            .iter()
            .map(|(locale, source)| (*locale, build_bundle(*locale, (*source).to_string())))
            .collect();

        Self {
            bundles,
            current_locale: initial,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> Locale {
        self.current_locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if locale != self.current_locale {
            tracing::debug!(from = %self.current_locale, to = %locale, "locale changed");
        }
        self.current_locale = locale;
    }

    /// Switches to the locale named by `code`.
    ///
    /// Unsupported codes are reported and leave the current locale untouched.
    pub fn set_locale_code(&mut self, code: &str) -> Result<Locale> {
        let locale = code.parse::<Locale>()?;
        self.set_locale(locale);
        Ok(locale)
    }

    /// Looks up `key` in the current locale, falling back to the key itself.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Same as [`I18n::tr`], with Fluent arguments for placeables.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, String)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.clone());
        }
        self.format(key, Some(&fluent_args))
    }

    /// Whether `locale`'s table defines `key`.
    pub fn has_message(&self, locale: Locale, key: &str) -> bool {
        self.bundles
            .get(&locale)
            .is_some_and(|bundle| bundle.has_message(key))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        let Some(bundle) = self.bundles.get(&self.current_locale) else {
            return key.to_string();
        };
        let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
            tracing::debug!(key, locale = %self.current_locale, "missing translation");
            return key.to_string();
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(key, ?errors, "translation formatted with errors");
        }
        value.to_string()
    }
}

fn build_bundle(locale: Locale, source: String) -> FluentBundle<FluentResource> {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            tracing::warn!(%locale, ?errors, "translation file has syntax errors");
            resource
        }
    };

    let mut bundle = FluentBundle::new(vec![locale.language_identifier()]);
    // Placeables render without bidi isolation marks ("01 / 05", not "\u{2068}01\u{2069} / ...").
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(%locale, ?errors, "duplicate translation keys");
    }
    bundle
}

fn resolve_locale(cli_lang: Option<&str>, config: &Config) -> Option<Locale> {
    // 1. Check CLI args
    if let Some(lang) = cli_lang {
        match lang.parse::<Locale>() {
            Ok(locale) => return Some(locale),
            Err(error) => tracing::warn!(%error, "ignoring --lang"),
        }
    }

    // 2. Check persisted preference
    if let Some(lang) = &config.general.language {
        match lang.parse::<Locale>() {
            Ok(locale) => return Some(locale),
            Err(error) => tracing::warn!(%error, "ignoring persisted language"),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const EN: &str = "greeting = Hello\ncounter = { $current } / { $total }\n";
    const TR: &str = "greeting = Merhaba\n";

    fn sample() -> I18n {
        I18n::from_sources(&[(Locale::En, EN), (Locale::Tr, TR)], Locale::En)
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.general.language = Some("en".to_string());
        assert_eq!(resolve_locale(Some("tr"), &config), Some(Locale::Tr));
    }

    #[test]
    fn resolve_locale_uses_persisted_preference() {
        let mut config = Config::default();
        config.general.language = Some("tr".to_string());
        assert_eq!(resolve_locale(None, &config), Some(Locale::Tr));
    }

    #[test]
    fn resolve_locale_skips_invalid_values() {
        let mut config = Config::default();
        config.general.language = Some("klingon".to_string());
        assert_eq!(resolve_locale(Some("xx"), &config), None);
        assert_eq!(I18n::new(Some("xx"), &config).current_locale(), Locale::En);
    }

    #[test]
    fn tr_uses_current_locale() {
        let mut i18n = sample();
        assert_eq!(i18n.tr("greeting"), "Hello");
        i18n.set_locale(Locale::Tr);
        assert_eq!(i18n.tr("greeting"), "Merhaba");
    }

    #[test]
    fn missing_key_falls_back_to_key_in_every_locale() {
        let mut i18n = sample();
        for locale in Locale::ALL {
            i18n.set_locale(locale);
            assert_eq!(i18n.tr("nowhere.to-be-found"), "nowhere.to-be-found");
        }
    }

    #[test]
    fn key_missing_from_one_table_falls_back_only_there() {
        let mut i18n = sample();
        i18n.set_locale(Locale::Tr);
        assert_eq!(
            i18n.tr_with_args("counter", &[("current", "01".into()), ("total", "05".into())]),
            "counter"
        );
    }

    #[test]
    fn tr_with_args_formats_placeables() {
        let i18n = sample();
        let text =
            i18n.tr_with_args("counter", &[("current", "02".into()), ("total", "35".into())]);
        assert_eq!(text, "02 / 35");
    }

    #[test]
    fn set_locale_code_rejects_unsupported_and_keeps_current() {
        let mut i18n = sample();
        i18n.set_locale(Locale::Tr);

        let result = i18n.set_locale_code("fr");
        assert_eq!(result, Err(Error::UnsupportedLocale("fr".to_string())));
        assert_eq!(i18n.current_locale(), Locale::Tr);

        assert_eq!(i18n.set_locale_code("en-GB"), Ok(Locale::En));
        assert_eq!(i18n.current_locale(), Locale::En);
    }

    /// Message identifiers declared at the start of a line (`key = value`).
    fn declared_keys(source: &str) -> Vec<&str> {
        source
            .lines()
            .filter(|line| line.starts_with(|c: char| c.is_ascii_alphabetic()))
            .filter_map(|line| line.split_once('=').map(|(key, _)| key.trim()))
            .collect()
    }

    #[test]
    fn embedded_tables_cover_the_same_keys() {
        let i18n = I18n::default();
        for locale in Locale::ALL {
            let filename = format!("{}.ftl", locale.code());
            let content = Asset::get(&filename).expect("embedded translation file");
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let keys = declared_keys(&source);
            assert!(!keys.is_empty());
            for key in keys {
                for other in Locale::ALL {
                    assert!(
                        i18n.has_message(other, key),
                        "{key} defined for {locale} but missing for {other}"
                    );
                }
            }
        }
    }

    #[test]
    fn embedded_tables_translate_navigation() {
        let mut i18n = I18n::from_sources(&[], Locale::En);
        assert_eq!(i18n.tr("nav-projects"), "nav-projects");

        i18n = I18n::default();
        i18n.set_locale(Locale::En);
        assert_eq!(i18n.tr("nav-projects"), "Projects");
        i18n.set_locale(Locale::Tr);
        assert_eq!(i18n.tr("nav-projects"), "Projeler");
    }
}
