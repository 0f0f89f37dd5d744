// SPDX-License-Identifier: MPL-2.0
//! User interface pages and shared building blocks.
//!
//! Pages follow the Elm-style "state down, messages up" pattern: each
//! exposes a `ViewContext`, its own `Message`, and an `Event` returned to
//! the application from `update`.
//!
//! # Pages
//!
//! - [`home`] - hero and project grid
//! - [`about`] - biography, figures and timeline
//! - [`media`] - press coverage, links and videos
//! - [`contact`] - studio details and the enquiry form
//!
//! # Shared Infrastructure
//!
//! - [`header`], [`footer`] - site chrome around every page
//! - [`components`] - small reusable widgets
//! - [`notifications`] - toast notifications
//! - [`styles`] - widget style functions
//! - [`design_tokens`] - colors, spacing, sizing and type scale

pub mod about;
pub mod components;
pub mod contact;
pub mod design_tokens;
pub mod footer;
pub mod header;
pub mod home;
pub mod media;
pub mod notifications;
pub mod styles;
