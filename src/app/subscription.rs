// SPDX-License-Identifier: MPL-2.0
//! Event subscription routing raw keyboard and resize events to the viewer.

use super::Message;
use iced::{event, Subscription};

/// Window resizes always reach the viewer so the overlay can recenter.
/// Keyboard events are routed whenever no focused widget captured them; the
/// viewer decides per key whether it is consumed.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| match &event {
        event::Event::Window(iced::window::Event::Resized(_)) => {
            Some(Message::RawEvent(event.clone()))
        }
        event::Event::Keyboard(..) => match status {
            event::Status::Ignored => Some(Message::RawEvent(event.clone())),
            event::Status::Captured => None,
        },
        _ => None,
    })
}
