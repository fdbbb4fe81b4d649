// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is a gallery lightbox viewer built with the Iced GUI framework.
//!
//! A gallery of marked items is enumerated once at construction. Activating an
//! item opens a full-size overlay (darkened glass, centered frame, caption and
//! previous/next/close controls) with wraparound navigation and keyboard
//! shortcuts. The viewer state machine and layout engine are headless and
//! fully unit-testable; the `app` module hosts them in an Iced application.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod layout;
pub mod lightbox;
pub mod loader;
