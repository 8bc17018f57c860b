// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are only taken from events no widget captured, so
//! typing into a focused widget never toggles playback.

use super::message::Shortcut;
use super::Message;
use crate::media::clock::TICK_INTERVAL;
use crate::ui::notifications::NotificationMessage;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval of the notification auto-dismiss check.
const NOTIFICATION_TICK: Duration = Duration::from_secs(1);

/// Routes unhandled key presses to [`Message::Shortcut`].
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
                if !modifiers.command() =>
            {
                shortcut_for(&key).map(Message::Shortcut)
            }
            _ => None,
        }
    })
}

/// Maps a key to its shortcut, if any.
fn shortcut_for(key: &Key) -> Option<Shortcut> {
    match key.as_ref() {
        Key::Named(Named::Escape) => Some(Shortcut::CloseProject),
        Key::Named(Named::Space) => Some(Shortcut::TogglePlayback),
        Key::Character(c) if c.eq_ignore_ascii_case("b") => Some(Shortcut::ToggleVariant),
        Key::Character(c) if c.eq_ignore_ascii_case("m") => Some(Shortcut::ToggleMute),
        _ => None,
    }
}

/// Drives the playback clock while a video plays.
pub fn create_playback_subscription(is_playing: bool) -> Subscription<Message> {
    if is_playing {
        time::every(TICK_INTERVAL).map(|_| Message::PlaybackTick)
    } else {
        Subscription::none()
    }
}

/// Periodic tick for notification auto-dismiss.
pub fn create_notification_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK).map(|_| Message::Notification(NotificationMessage::Tick))
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys_map_to_shortcuts() {
        assert_eq!(
            shortcut_for(&Key::Named(Named::Escape)),
            Some(Shortcut::CloseProject)
        );
        assert_eq!(
            shortcut_for(&Key::Named(Named::Space)),
            Some(Shortcut::TogglePlayback)
        );
        assert_eq!(shortcut_for(&Key::Named(Named::Enter)), None);
    }

    #[test]
    fn letters_map_case_insensitively() {
        assert_eq!(
            shortcut_for(&Key::Character("B".into())),
            Some(Shortcut::ToggleVariant)
        );
        assert_eq!(
            shortcut_for(&Key::Character("m".into())),
            Some(Shortcut::ToggleMute)
        );
        assert_eq!(shortcut_for(&Key::Character("x".into())), None);
    }
}
