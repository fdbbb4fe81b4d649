// SPDX-License-Identifier: MPL-2.0
//! Frame geometry for the overlay: pure functions from the loaded image's
//! natural dimensions, the caption height and the viewport to a concrete
//! frame rectangle.
//!
//! Results are fresh immutable values computed per load-completion and per
//! viewport resize; nothing here is cached across navigations.

/// Viewport width below which the frame stops centering and fills the
/// viewport width instead.
pub const NARROW_BREAKPOINT: f32 = 600.0;

/// Current viewport dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Intrinsic pixel dimensions of a decoded image, independent of styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaturalSize {
    pub width: u32,
    pub height: u32,
}

/// Difference between the frame's rendered box and its declared box
/// (padding, border). Centering subtracts the slack so it stays exact
/// regardless of box-model choices.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameChrome {
    pub horizontal_slack: f32,
    pub vertical_slack: f32,
    /// Vertical padding added to the frame height in responsive mode.
    pub vertical_padding: f32,
}

/// Previously declared (or default) frame dimensions, used as the fallback
/// when no image has loaded yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStyle {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Frame sized to the image and centered in the viewport.
    Centered,
    /// Narrow viewport: frame fills the viewport width.
    Responsive,
}

/// Computed frame rectangle. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutResult {
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub top: f32,
    pub mode: LayoutMode,
}

/// Computes the frame rectangle for the current overlay state.
///
/// Preferred frame size equals the image's natural dimensions, with the
/// caption height added to the frame height. With no image loaded yet the
/// previously declared style dimensions are used unchanged.
pub fn compute(
    image: Option<NaturalSize>,
    caption_height: f32,
    viewport: Viewport,
    chrome: FrameChrome,
    fallback: FrameStyle,
) -> LayoutResult {
    if viewport.width < NARROW_BREAKPOINT {
        return compute_responsive(image, caption_height, viewport, chrome, fallback);
    }

    let (width, height) = match image {
        Some(natural) => (
            natural.width as f32,
            natural.height as f32 + caption_height,
        ),
        None => (fallback.width, fallback.height),
    };

    LayoutResult {
        width,
        height,
        left: (viewport.width - width - chrome.horizontal_slack) / 2.0,
        top: (viewport.height - height - chrome.vertical_slack) / 2.0,
        mode: LayoutMode::Centered,
    }
}

/// Narrow-viewport layout: width collapses to the full viewport and height
/// derives purely from the image's rendered height plus caption plus
/// vertical padding.
fn compute_responsive(
    image: Option<NaturalSize>,
    caption_height: f32,
    viewport: Viewport,
    chrome: FrameChrome,
    fallback: FrameStyle,
) -> LayoutResult {
    let height = match image {
        Some(natural) => natural.height as f32 + caption_height + chrome.vertical_padding,
        None => fallback.height,
    };

    let top = ((viewport.height - height - chrome.vertical_slack) / 2.0).max(0.0);

    LayoutResult {
        width: viewport.width,
        height,
        left: 0.0,
        top,
        mode: LayoutMode::Responsive,
    }
}

/// The glass backdrop always covers the viewport exactly.
pub fn backdrop_size(viewport: Viewport) -> (f32, f32) {
    (viewport.width, viewport.height)
}
