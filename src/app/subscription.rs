// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.
//!
//! Each one exists only while it has work to do: gallery input and frames
//! while the viewer is open, the notification tick while toasts are pending.

use super::Message;
use crate::gallery;
use crate::ui::notifications;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval at which toast lifetimes are checked.
const NOTIFICATION_TICK: Duration = Duration::from_millis(500);

pub fn create_gallery_subscription(gallery: &gallery::State) -> Subscription<Message> {
    gallery.subscription().map(Message::Gallery)
}

pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK)
            .map(|now| Message::Notification(notifications::Message::Tick(now)))
    } else {
        Subscription::none()
    }
}
