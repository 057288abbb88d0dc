// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only navigation keys are routed: arrows move keyboard focus and Enter
//! activates it. Events already captured by a widget are left alone.

use super::Message;
use crate::ui::focus::NavKey;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Listens for navigation keys on every view.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(named),
                ..
            }) => nav_key(named).map(Message::Key),
            _ => None,
        }
    })
}

fn nav_key(named: Named) -> Option<NavKey> {
    match named {
        Named::ArrowUp => Some(NavKey::Up),
        Named::ArrowDown => Some(NavKey::Down),
        Named::ArrowLeft => Some(NavKey::Left),
        Named::ArrowRight => Some(NavKey::Right),
        Named::Enter => Some(NavKey::Enter),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_enter_are_navigation_keys() {
        assert_eq!(nav_key(Named::ArrowDown), Some(NavKey::Down));
        assert_eq!(nav_key(Named::ArrowLeft), Some(NavKey::Left));
        assert_eq!(nav_key(Named::Enter), Some(NavKey::Enter));
        assert_eq!(nav_key(Named::Escape), None);
        assert_eq!(nav_key(Named::Tab), None);
    }
}
