// SPDX-License-Identifier: MPL-2.0
//! Modal gallery viewer for a single project's photographs.
//!
//! # Components
//!
//! - [`component`] - viewer state machine, messages and effects
//! - [`navigation`] - wrapping index arithmetic and slide direction
//! - [`transition`] - `Idle`/`Running` slide animation state
//! - [`scroll_lock`] - single-claim background scroll suppression
//! - [`input`] - keyboard bindings
//! - [`pane`], [`indicator`], [`info_panel`] - rendering

pub mod component;
pub mod indicator;
pub mod info_panel;
pub mod input;
pub mod navigation;
pub mod pane;
pub mod scroll_lock;
pub mod transition;

pub use component::{Effect, Message, Phase, State, ViewEnv};
pub use navigation::{Direction, Slideshow};
pub use scroll_lock::{ScrollGuard, ScrollLock};
pub use transition::Transition;
