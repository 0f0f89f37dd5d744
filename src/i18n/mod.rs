// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles locale resolution, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Closed set of supported locales ([`Locale`])
//! - Embedded `.ftl` translation files, parsed once at startup
//! - Runtime language switching
//! - Missing keys render as the key itself so gaps stay visible

pub mod fluent;
pub mod locale;

pub use fluent::I18n;
pub use locale::Locale;
