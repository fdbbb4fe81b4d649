// SPDX-License-Identifier: MPL-2.0
//! The three overlay controls as a tagged variant over previous/next/close,
//! rendered by one generic builder in the app layer.

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Previous,
    Next,
    Close,
}

impl ControlKind {
    /// Render order inside the overlay frame.
    pub const ALL: [ControlKind; 3] = [ControlKind::Previous, ControlKind::Next, ControlKind::Close];

    /// Configured label for this control.
    pub fn label<'a>(&self, config: &'a Config) -> &'a str {
        match self {
            ControlKind::Previous => config.previous_label(),
            ControlKind::Next => config.next_label(),
            ControlKind::Close => config.close_label(),
        }
    }

    /// Stable style role, usable as a class name or widget id.
    pub fn role(&self) -> &'static str {
        match self {
            ControlKind::Previous => "lightbox-previous-button",
            ControlKind::Next => "lightbox-next-button",
            ControlKind::Close => "lightbox-close-button",
        }
    }
}
