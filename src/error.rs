// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error types.
//!
//! Errors are `Clone` so they can travel inside Iced messages (for example
//! the result of an async contact submission).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Catalog Error: {0}")]
    Catalog(String),

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Gallery Error: {0}")]
    Gallery(#[from] GalleryError),

    #[error("Contact Error: {0}")]
    Contact(#[from] ContactError),
}

/// Reasons the gallery viewer refuses to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// The project has no images; the catalog must never hand one over.
    #[error("project {project_id} has no images")]
    EmptyImageList { project_id: u32 },

    /// Another viewer already holds the page scroll lock.
    #[error("another gallery viewer is already open")]
    ScrollLockHeld,
}

impl GalleryError {
    /// Translation key for the notification shown when opening fails.
    pub fn i18n_key(self) -> &'static str {
        match self {
            GalleryError::EmptyImageList { .. } => "viewer-open-empty",
            GalleryError::ScrollLockHeld => "viewer-open-busy",
        }
    }
}

/// Failures of the contact form submission.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// At least one field is blank.
    #[error("All fields are required")]
    MissingFields,

    /// The email address does not look like `local@domain.tld`.
    #[error("Invalid email address")]
    InvalidEmail,

    /// The endpoint answered with its error shape.
    #[error("{0}")]
    Rejected(String),

    /// The request never got a response (DNS, connection, timeout...).
    #[error("Network error: {0}")]
    Transport(String),

    /// The endpoint answered with a body that matches neither shape.
    #[error("Unexpected response: {0}")]
    MalformedResponse(String),
}

impl ContactError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ContactError::MissingFields => "contact-error-required",
            ContactError::InvalidEmail => "contact-error-email",
            ContactError::Rejected(_) => "contact-error-rejected",
            ContactError::Transport(_) => "contact-error-network",
            ContactError::MalformedResponse(_) => "contact-error-general",
        }
    }

    /// Server-provided detail worth showing next to the localized message.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ContactError::Rejected(msg) => Some(msg),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn gallery_error_wraps_into_crate_error() {
        let err: Error = GalleryError::EmptyImageList { project_id: 4 }.into();
        assert_eq!(format!("{}", err), "Gallery Error: project 4 has no images");
    }

    #[test]
    fn gallery_error_i18n_keys() {
        assert_eq!(
            GalleryError::EmptyImageList { project_id: 2 }.i18n_key(),
            "viewer-open-empty"
        );
        assert_eq!(GalleryError::ScrollLockHeld.i18n_key(), "viewer-open-busy");
    }

    #[test]
    fn contact_error_i18n_keys() {
        assert_eq!(
            ContactError::MissingFields.i18n_key(),
            "contact-error-required"
        );
        assert_eq!(ContactError::InvalidEmail.i18n_key(), "contact-error-email");
        assert_eq!(
            ContactError::Transport("refused".into()).i18n_key(),
            "contact-error-network"
        );
    }

    #[test]
    fn only_rejections_carry_detail() {
        let rejected = ContactError::Rejected("Server configuration error".into());
        assert_eq!(rejected.detail(), Some("Server configuration error"));
        assert_eq!(ContactError::InvalidEmail.detail(), None);
    }
}
