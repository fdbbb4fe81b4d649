// SPDX-License-Identifier: MPL-2.0
//! Image loading: resolves a source path to decoded natural dimensions and a
//! render handle.
//!
//! A load completes exactly once. Which completions may still touch the
//! overlay is decided by the viewer's stale-result check, keyed on the
//! session and index recorded in the [`LoadRequest`] at issue time.

use crate::error::{Error, Result};
use crate::layout::NaturalSize;
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    pub fn natural_size(&self) -> NaturalSize {
        NaturalSize {
            width: self.width,
            height: self.height,
        }
    }
}

/// A navigation step's pending load, tagged with the session and index it
/// was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub source: PathBuf,
    pub requested_index: usize,
    pub session: u64,
}

/// Successful completion of a [`LoadRequest`].
#[derive(Debug, Clone)]
pub struct LoadCompletion {
    pub request: LoadRequest,
    pub image: ImageData,
}

/// Loads an image from the given path and returns its decoded data.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read or its format is invalid
/// or unsupported.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img_bytes = fs::read(path.as_ref()).map_err(|e| Error::Io(e.to_string()))?;

    let img = image_rs::load_from_memory(&img_bytes).map_err(|e| Error::Io(e.to_string()))?;

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}
