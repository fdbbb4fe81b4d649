// SPDX-License-Identifier: MPL-2.0
//! The overlay's visual state: glass backdrop, image frame and caption.
//!
//! The overlay owns no navigation logic. It records what is currently
//! displayed and derives a fresh frame rectangle on demand; layout results
//! are never cached across navigations.

use crate::layout::{self, FrameChrome, FrameStyle, LayoutResult, Viewport};
use crate::loader::ImageData;

/// Caption strip height assumed until the rendering boundary measures the
/// real one.
pub const DEFAULT_CAPTION_HEIGHT: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct Overlay {
    mounted: bool,
    image: Option<ImageData>,
    caption: String,
    caption_height: f32,
    chrome: FrameChrome,
    frame_style: FrameStyle,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            mounted: false,
            image: None,
            caption: String::new(),
            caption_height: DEFAULT_CAPTION_HEIGHT,
            chrome: FrameChrome::default(),
            frame_style: FrameStyle::default(),
        }
    }
}

impl Overlay {
    /// Mounts the overlay with no image; the frame falls back to its default
    /// style dimensions until the first load completes.
    pub fn mount(&mut self) {
        self.mounted = true;
        self.image = None;
        self.caption.clear();
        self.frame_style = FrameStyle::default();
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.image = None;
        self.caption.clear();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Applies a completed load: the frame's declared dimensions track the
    /// image so later imageless layouts keep the same footprint.
    pub fn display(&mut self, image: ImageData, caption: &str) {
        self.frame_style = FrameStyle {
            width: image.width as f32,
            height: image.height as f32 + self.caption_height,
        };
        self.image = Some(image);
        self.caption = caption.to_string();
    }

    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn caption_height(&self) -> f32 {
        self.caption_height
    }

    /// Records the caption strip height measured by the rendering boundary.
    pub fn set_caption_height(&mut self, height: f32) {
        self.caption_height = height;
    }

    pub fn set_chrome(&mut self, chrome: FrameChrome) {
        self.chrome = chrome;
    }

    /// Derives the frame rectangle for the given viewport. Called on every
    /// load-completion and on every resize; never triggers a load.
    pub fn layout(&self, viewport: Viewport) -> LayoutResult {
        layout::compute(
            self.image.as_ref().map(ImageData::natural_size),
            self.caption_height,
            viewport,
            self.chrome,
            self.frame_style,
        )
    }

    /// The glass always tracks the viewport.
    pub fn backdrop_size(&self, viewport: Viewport) -> (f32, f32) {
        layout::backdrop_size(viewport)
    }
}
