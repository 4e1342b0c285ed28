// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window and keyboard events are translated into top-level
//! messages; routing to the active screen happens in `update`.

use super::Message;
use iced::keyboard::{self, key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Interval of the notification auto-dismiss tick.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// File drops, window resizes, Escape and the undo shortcut.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match key.as_ref() {
                keyboard::Key::Named(key::Named::Escape) => Some(Message::EscapePressed),
                // Text inputs keep their own undo.
                keyboard::Key::Character("z")
                    if modifiers.command() && matches!(status, event::Status::Ignored) =>
                {
                    Some(Message::UndoPressed)
                }
                _ => None,
            }
        }
        _ => None,
    })
}

/// Periodic tick for notification auto-dismiss, only while toasts exist.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
