// SPDX-License-Identifier: MPL-2.0
//! Application root state wiring the viewer to the Iced runtime.
//!
//! The `App` struct owns the headless viewer plus the pieces only the shell
//! cares about (thumbnail cache, tracked viewport). Environment capabilities
//! and the gallery are resolved before the runtime launches so a broken
//! setup fails fast with a crate error instead of a half-drawn window.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::gallery::Gallery;
use crate::layout::Viewport;
use crate::lightbox::{Capabilities, Lightbox};
use crate::loader::{self, ImageData};
use iced::{window, Element, Subscription, Task, Theme};
use std::path::Path;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;

/// Root Iced application state bridging the viewer and the widget tree.
#[derive(Debug)]
pub struct App {
    config: Config,
    lightbox: Lightbox,
    /// Decoded grid thumbnails, one slot per gallery item.
    thumbnails: Vec<Option<ImageData>>,
    /// Last known window size; the overlay recenters against it.
    viewport: Viewport,
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

fn build_gallery(flags: &Flags, marker: &str) -> Result<Gallery> {
    match &flags.gallery_path {
        Some(raw) => {
            let path = Path::new(raw);
            if path.extension().is_some_and(|ext| ext == "toml") {
                Gallery::from_manifest(path, marker)
            } else {
                Gallery::scan_directory(path, marker)
            }
        }
        None => Ok(Gallery::default()),
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> Result<()> {
    use std::cell::RefCell;

    let capabilities = Capabilities::detect();
    let config = config::load()?;
    let marker = flags
        .marker
        .clone()
        .unwrap_or_else(|| config.marker().to_string());
    let gallery = build_gallery(&flags, &marker)?;
    let lightbox = Lightbox::new(gallery, config.clone(), &capabilities)?;

    // Wrap boot state in RefCell<Option<_>> to satisfy the Fn trait
    // requirement while only consuming it once (iced 0.14 requires Fn,
    // not FnOnce)
    let boot_state = RefCell::new(Some((config, lightbox)));
    let boot = move || {
        let (config, lightbox) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(config, lightbox)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
        .map_err(|error| Error::EnvironmentUnsupported(error.to_string()))
}

impl App {
    /// Initializes the shell and kicks off thumbnail loads for every
    /// gallery item.
    fn new(config: Config, lightbox: Lightbox) -> (Self, Task<Message>) {
        let sources: Vec<_> = lightbox
            .gallery()
            .items()
            .iter()
            .map(|item| item.source.clone())
            .collect();

        let app = Self {
            config,
            thumbnails: vec![None; sources.len()],
            lightbox,
            viewport: Viewport::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        };

        let loads = sources.into_iter().enumerate().map(|(index, source)| {
            Task::perform(
                async move { (index, loader::load_image(&source)) },
                |(index, result)| Message::ThumbnailLoaded { index, result },
            )
        });

        (app, Task::batch(loads))
    }

    fn title(&self) -> String {
        match self
            .lightbox
            .current_index()
            .and_then(|index| self.lightbox.gallery().get(index))
        {
            Some(item) => format!("{} - Lightbox", item.caption),
            None => "Lightbox".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle_message(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            lightbox: &self.lightbox,
            thumbnails: &self.thumbnails,
            viewport: self.viewport,
            config: &self.config,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::GalleryItem;
    use iced::keyboard;
    use std::path::PathBuf;

    fn app(count: usize) -> App {
        let items = (0..count)
            .map(|i| GalleryItem {
                source: PathBuf::from(format!("/gallery/{i}.png")),
                caption: format!("Item {i}"),
                marker: "lightbox".into(),
            })
            .collect();
        let gallery = Gallery::from_items(items);
        let lightbox = Lightbox::new(gallery, Config::default(), &Capabilities::detect())
            .expect("construction should succeed");
        let (app, _task) = App::new(Config::default(), lightbox);
        app
    }

    fn key_press(named: keyboard::key::Named) -> iced::event::Event {
        iced::event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: keyboard::key::Physical::Unidentified(
                keyboard::key::NativeCode::Unidentified,
            ),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn title_reflects_open_item() {
        let mut app = app(3);
        assert_eq!(app.title(), "Lightbox");

        let _ = app.update(Message::ItemClicked(1));
        assert_eq!(app.title(), "Item 1 - Lightbox");
    }

    #[test]
    fn item_click_opens_viewer() {
        let mut app = app(3);
        let _ = app.update(Message::ItemClicked(2));
        assert!(app.lightbox.is_open());
        assert_eq!(app.lightbox.current_index(), Some(2));
    }

    #[test]
    fn escape_event_closes_viewer() {
        let mut app = app(3);
        let _ = app.update(Message::ItemClicked(0));
        let _ = app.update(Message::RawEvent(key_press(keyboard::key::Named::Escape)));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn arrow_events_navigate() {
        let mut app = app(3);
        let _ = app.update(Message::ItemClicked(0));

        let _ = app.update(Message::RawEvent(key_press(keyboard::key::Named::ArrowRight)));
        assert_eq!(app.lightbox.current_index(), Some(1));

        let _ = app.update(Message::RawEvent(key_press(keyboard::key::Named::ArrowLeft)));
        assert_eq!(app.lightbox.current_index(), Some(0));
    }

    #[test]
    fn arrow_events_are_ignored_while_closed() {
        let mut app = app(3);
        let _ = app.update(Message::RawEvent(key_press(keyboard::key::Named::ArrowRight)));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn resize_event_updates_tracked_viewport() {
        let mut app = app(3);
        let _ = app.update(Message::RawEvent(iced::event::Event::Window(
            window::Event::Resized(iced::Size::new(640.0, 480.0)),
        )));
        assert_eq!(app.viewport, Viewport::new(640.0, 480.0));
    }

    #[test]
    fn thumbnail_completion_fills_its_slot() {
        let mut app = app(2);
        let image = ImageData::from_rgba(4, 4, vec![255_u8; 64]);
        let _ = app.update(Message::ThumbnailLoaded {
            index: 1,
            result: Ok(image),
        });
        assert!(app.thumbnails[0].is_none());
        assert!(app.thumbnails[1].is_some());
    }

    #[test]
    fn failed_thumbnail_leaves_slot_empty() {
        let mut app = app(1);
        let _ = app.update(Message::ThumbnailLoaded {
            index: 0,
            result: Err(Error::Io("missing".into())),
        });
        assert!(app.thumbnails[0].is_none());
    }

    #[test]
    fn stale_click_on_out_of_range_index_is_ignored() {
        let mut app = app(2);
        let _ = app.update(Message::ItemClicked(5));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn build_gallery_without_path_is_empty() {
        let gallery = build_gallery(&Flags::default(), "lightbox").expect("default gallery");
        assert!(gallery.is_empty());
    }
}
