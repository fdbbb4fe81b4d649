// SPDX-License-Identifier: MPL-2.0
//! Update handlers translating messages into viewer transitions and side
//! effects (asynchronous image loads).

use super::{App, Message};
use crate::layout::Viewport;
use crate::lightbox::{Effect, Key};
use crate::loader::{self, LoadCompletion, LoadRequest};
use iced::{event, keyboard, window, Task};

pub fn handle_message(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::ItemClicked(index) => match app.lightbox.activate(index) {
            Ok(effect) => run_effect(effect),
            // grid clicks satisfy the activation preconditions; a stale
            // click on a rebuilt gallery is a no-op
            Err(_) => Task::none(),
        },
        Message::Control(kind) => run_effect(app.lightbox.control_activated(kind)),
        Message::GlassClicked => {
            app.lightbox.glass_clicked();
            Task::none()
        }
        Message::FigureClicked => run_effect(app.lightbox.figure_clicked()),
        Message::ImageLoaded { request, result } => {
            if let Ok(image) = result {
                let _ = app.lightbox.complete_load(LoadCompletion { request, image });
            }
            // a failed load never completes the visual update; the overlay
            // keeps its current content
            Task::none()
        }
        Message::ThumbnailLoaded { index, result } => {
            if let (Some(slot), Ok(image)) = (app.thumbnails.get_mut(index), result) {
                *slot = Some(image);
            }
            Task::none()
        }
        Message::RawEvent(event) => handle_raw_event(app, &event),
    }
}

fn handle_raw_event(app: &mut App, event: &event::Event) -> Task<Message> {
    match event {
        event::Event::Window(window::Event::Resized(size)) => {
            // recenter only; the already-loaded image is reused
            app.viewport = Viewport::new(size.width, size.height);
            Task::none()
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            let response = app.lightbox.handle_key(map_key(key));
            run_effect(response.effect)
        }
        _ => Task::none(),
    }
}

fn map_key(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Key::ArrowLeft,
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Key::ArrowRight,
        keyboard::Key::Named(keyboard::key::Named::Escape) => Key::Escape,
        _ => Key::Other,
    }
}

fn run_effect(effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::Load(request) => spawn_load(request),
    }
}

/// One-shot load task; the request rides along so the completion can be
/// checked for staleness.
fn spawn_load(request: LoadRequest) -> Task<Message> {
    let source = request.source.clone();
    Task::perform(
        async move { (request, loader::load_image(&source)) },
        |(request, result)| Message::ImageLoaded { request, result },
    )
}
