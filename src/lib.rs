// SPDX-License-Identifier: MPL-2.0
//! `atelier` is the desktop edition of an architect's bilingual portfolio,
//! built with the Iced GUI framework.
//!
//! It shows a project catalog, a lightbox-style gallery viewer with keyboard
//! and pointer navigation, About and Media pages, and a contact form that
//! posts to an external mail relay. All text is resolved through Fluent
//! translation tables for English and Turkish.

pub mod app;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
