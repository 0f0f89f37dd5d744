// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.

use crate::config::{self, Config};
use crate::i18n::{I18n, Locale};
use std::path::PathBuf;

/// Applies the newly selected locale and persists it to the config file.
///
/// A failed write is logged; the in-memory change stays.
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut Config,
    config_dir: Option<PathBuf>,
    locale: Locale,
) {
    i18n.set_locale(locale);
    config.general.language = Some(locale.code().to_string());

    if let Err(error) = config::save_with_override(config, config_dir) {
        tracing::warn!(%error, "failed to save language preference");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn language_change_is_saved() {
        let dir = tempdir().expect("temp dir");
        let mut i18n = I18n::default();
        let mut config = Config::default();

        apply_language_change(
            &mut i18n,
            &mut config,
            Some(dir.path().to_path_buf()),
            Locale::Tr,
        );

        assert_eq!(i18n.current_locale(), Locale::Tr);
        let (reloaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(reloaded.general.language.as_deref(), Some("tr"));
    }

    #[test]
    fn unwritable_directory_keeps_the_change() {
        let dir = tempdir().expect("temp dir");
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").expect("write blocker");

        let mut i18n = I18n::default();
        let mut config = Config::default();
        apply_language_change(&mut i18n, &mut config, Some(blocker), Locale::Tr);

        assert_eq!(i18n.current_locale(), Locale::Tr);
        assert_eq!(config.general.language.as_deref(), Some("tr"));
    }
}
