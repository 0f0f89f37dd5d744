// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery;
use crate::ui::{about, contact, header, home, media, notifications};
use iced::widget::scrollable::RelativeOffset;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Home(home::Message),
    About(about::Message),
    Media(media::Message),
    Contact(contact::Message),
    Gallery(gallery::Message),
    Notification(notifications::Message),
    /// The page scrollable moved; remembered so it can be restored after
    /// the viewer closes.
    PageScrolled(RelativeOffset),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (`en`, `tr`, `tr-TR`...).
    pub lang: Option<String>,
    /// Config directory that takes precedence over `--config-dir` and
    /// `ATELIER_CONFIG_DIR`.
    pub config_dir: Option<PathBuf>,
    /// Directory catalog image paths are resolved against.
    pub image_root: Option<PathBuf>,
}
