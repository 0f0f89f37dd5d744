// SPDX-License-Identifier: MPL-2.0
//! Keyboard bindings for the open viewer.
//!
//! | Key           | Action                    |
//! |---------------|---------------------------|
//! | `ArrowLeft`   | previous image            |
//! | `ArrowRight`  | next image                |
//! | `Escape`      | close info panel / viewer |
//! | `I`           | toggle info panel         |

use super::component::Message;
use iced::{event, keyboard, window};

/// Maps a pressed key to a viewer message.
#[must_use]
pub fn map_key(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Message::Previous),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Message::Next),
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::Cancel),
        keyboard::Key::Character(c) if c.eq_ignore_ascii_case("i") => Some(Message::ToggleInfo),
        _ => None,
    }
}

/// Event filter for [`iced::event::listen_with`].
///
/// Events already captured by a widget are left alone.
pub fn map_event(
    event: event::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => map_key(&key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_navigate() {
        assert_eq!(
            map_key(&keyboard::Key::Named(keyboard::key::Named::ArrowLeft)),
            Some(Message::Previous)
        );
        assert_eq!(
            map_key(&keyboard::Key::Named(keyboard::key::Named::ArrowRight)),
            Some(Message::Next)
        );
    }

    #[test]
    fn escape_cancels() {
        assert_eq!(
            map_key(&keyboard::Key::Named(keyboard::key::Named::Escape)),
            Some(Message::Cancel)
        );
    }

    #[test]
    fn info_key_is_case_insensitive() {
        assert_eq!(
            map_key(&keyboard::Key::Character("i".into())),
            Some(Message::ToggleInfo)
        );
        assert_eq!(
            map_key(&keyboard::Key::Character("I".into())),
            Some(Message::ToggleInfo)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(map_key(&keyboard::Key::Character("x".into())), None);
        assert_eq!(
            map_key(&keyboard::Key::Named(keyboard::key::Named::ArrowUp)),
            None
        );
    }
}
