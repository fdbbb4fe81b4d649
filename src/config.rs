// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! The runtime configuration surface is deliberately small: the marker that
//! selects gallery items and the labels of the three overlay controls.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedLightbox";

/// Marker that selects gallery items (the manifest `rel` attribute).
pub const DEFAULT_MARKER: &str = "lightbox";

/// Labels of the overlay controls.
pub const DEFAULT_PREVIOUS_LABEL: &str = "Prev";
pub const DEFAULT_NEXT_LABEL: &str = "Next";
pub const DEFAULT_CLOSE_LABEL: &str = "\u{2715}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    pub marker: Option<String>,
    #[serde(default)]
    pub previous_label: Option<String>,
    #[serde(default)]
    pub next_label: Option<String>,
    #[serde(default)]
    pub close_label: Option<String>,
}

impl Config {
    pub fn marker(&self) -> &str {
        self.marker.as_deref().unwrap_or(DEFAULT_MARKER)
    }

    pub fn previous_label(&self) -> &str {
        self.previous_label
            .as_deref()
            .unwrap_or(DEFAULT_PREVIOUS_LABEL)
    }

    pub fn next_label(&self) -> &str {
        self.next_label.as_deref().unwrap_or(DEFAULT_NEXT_LABEL)
    }

    pub fn close_label(&self) -> &str {
        self.close_label.as_deref().unwrap_or(DEFAULT_CLOSE_LABEL)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
