// SPDX-License-Identifier: MPL-2.0
//! Host capability probe checked once at viewer construction.

use crate::error::{Error, Result};

/// Boolean vector of the host features the viewer depends on. Any missing
/// capability makes construction fail before any state is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// The host can deliver discrete input events to the viewer.
    pub event_delivery: bool,
    /// The host can enumerate marked gallery items.
    pub item_enumeration: bool,
    /// The host can route keyboard input while the overlay is open.
    pub keyboard_capture: bool,
    /// The host reports viewport dimensions and resize changes.
    pub window_metrics: bool,
    /// The host can decode and present raster images.
    pub image_presentation: bool,
}

impl Capabilities {
    /// Probes the current host. The Iced shell supports everything the
    /// viewer needs, so this returns a fully capable vector.
    pub fn detect() -> Self {
        Self {
            event_delivery: true,
            item_enumeration: true,
            keyboard_capture: true,
            window_metrics: true,
            image_presentation: true,
        }
    }

    /// Fails with [`Error::EnvironmentUnsupported`] naming the first missing
    /// capability, if any.
    pub fn verify(&self) -> Result<()> {
        let required = [
            (self.event_delivery, "event delivery"),
            (self.item_enumeration, "item enumeration"),
            (self.keyboard_capture, "keyboard capture"),
            (self.window_metrics, "window metrics"),
            (self.image_presentation, "image presentation"),
        ];

        for (available, name) in required {
            if !available {
                return Err(Error::EnvironmentUnsupported(name.to_string()));
            }
        }

        Ok(())
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect()
    }
}
