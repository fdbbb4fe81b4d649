// SPDX-License-Identifier: MPL-2.0
//! Gallery enumeration: the ordered, fixed collection of items the viewer
//! navigates.
//!
//! Items are enumerated exactly once, at construction. A gallery built after
//! files were added or removed does not track those changes; callers rebuild
//! the gallery to pick them up.

use crate::config::DEFAULT_MARKER;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// One navigable gallery member: a full-size source and its caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub source: PathBuf,
    pub caption: String,
    pub marker: String,
}

/// Ordered, immutable collection of gallery items.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gallery {
    items: Vec<GalleryItem>,
}

/// Manifest entry as written in a gallery TOML file.
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    source: String,
    #[serde(default)]
    caption: Option<String>,
    #[serde(default)]
    rel: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "item")]
    items: Vec<ManifestEntry>,
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

fn caption_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .to_string()
}

impl Gallery {
    /// Builds a gallery from an already-enumerated item list.
    ///
    /// This is the seam for hosts that supply their own item discovery.
    pub fn from_items(items: Vec<GalleryItem>) -> Self {
        Self { items }
    }

    /// Reads a gallery manifest and keeps the entries whose `rel` matches
    /// `marker`. Entries without an explicit `rel` carry the default marker.
    /// Relative sources are resolved against the manifest's directory.
    pub fn from_manifest(path: &Path, marker: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let manifest: Manifest =
            toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));

        let items = manifest
            .items
            .into_iter()
            .filter(|entry| entry.rel.as_deref().unwrap_or(DEFAULT_MARKER) == marker)
            .map(|entry| {
                let source = base.join(&entry.source);
                let caption = entry
                    .caption
                    .unwrap_or_else(|| caption_from_path(&source));
                GalleryItem {
                    source,
                    caption,
                    marker: marker.to_string(),
                }
            })
            .collect();

        Ok(Self { items })
    }

    /// Scans a directory for supported image files, sorted by file name.
    /// Captions default to the file stem.
    pub fn scan_directory(directory: &Path, marker: &str) -> Result<Self> {
        let mut sources = Vec::new();

        for entry in fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_image(&path) {
                sources.push(path);
            }
        }

        sources.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let items = sources
            .into_iter()
            .map(|source| {
                let caption = caption_from_path(&source);
                GalleryItem {
                    source,
                    caption,
                    marker: marker.to_string(),
                }
            })
            .collect();

        Ok(Self { items })
    }

    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
