// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::lightbox::ControlKind;
use crate::loader::{ImageData, LoadRequest};

/// Messages consumed by `App::update`. Input events funnel through
/// `RawEvent`; everything else is a widget interaction or a finished load.
#[derive(Debug, Clone)]
pub enum Message {
    /// A gallery thumbnail was activated.
    ItemClicked(usize),
    /// One of the overlay controls was pressed.
    Control(ControlKind),
    /// The glass backdrop was clicked.
    GlassClicked,
    /// The displayed image was clicked (click-to-advance).
    FigureClicked,
    /// A full-size image load finished.
    ImageLoaded {
        request: LoadRequest,
        result: Result<ImageData, Error>,
    },
    /// A grid thumbnail load finished.
    ThumbnailLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    /// Raw runtime event (keyboard, window resize).
    RawEvent(iced::event::Event),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Gallery directory or `.toml` manifest to open.
    pub gallery_path: Option<String>,
    /// Marker overriding the configured item selector.
    pub marker: Option<String>,
}
