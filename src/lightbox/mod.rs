// SPDX-License-Identifier: MPL-2.0
//! The viewer state machine: activation/deactivation lifecycle, wraparound
//! navigation and asynchronous load coordination.
//!
//! The machine has two states, closed and open. A [`Session`] exists exactly
//! while the overlay is mounted and is owned by its [`Lightbox`] instance;
//! two instances never share keyboard or resize wiring. Transition methods
//! return an [`Effect`] so the hosting shell decides how to run side effects
//! (typically spawning an image load).

pub mod capabilities;
pub mod controls;
pub mod overlay;

pub use capabilities::Capabilities;
pub use controls::ControlKind;
pub use overlay::Overlay;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::gallery::Gallery;
use crate::layout::{LayoutResult, Viewport};
use crate::loader::{LoadCompletion, LoadRequest};

/// State of one open viewer: current index plus keyboard-capture flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    current_index: usize,
    keyboard_captured: bool,
    id: u64,
}

impl Session {
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_keyboard_captured(&self) -> bool {
        self.keyboard_captured
    }
}

/// Keys the state machine understands. The hosting shell maps its native
/// key events onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start loading the image for the new current index.
    Load(LoadRequest),
}

/// Outcome of a key press: the requested effect plus whether the key was
/// consumed (and must not reach other handlers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    pub effect: Effect,
    pub consumed: bool,
}

impl KeyResponse {
    fn ignored() -> Self {
        Self {
            effect: Effect::None,
            consumed: false,
        }
    }
}

/// The lightbox viewer over one enumerated gallery.
#[derive(Debug, Clone)]
pub struct Lightbox {
    gallery: Gallery,
    config: Config,
    session: Option<Session>,
    sessions_started: u64,
    overlay: Overlay,
}

impl Lightbox {
    /// Builds a viewer over an already-enumerated gallery. The capability
    /// check runs once, here; a missing capability aborts construction.
    pub fn new(gallery: Gallery, config: Config, capabilities: &Capabilities) -> Result<Self> {
        capabilities.verify()?;

        Ok(Self {
            gallery,
            config,
            session: None,
            sessions_started: 0,
            overlay: Overlay::default(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(Session::current_index)
    }

    pub fn is_keyboard_captured(&self) -> bool {
        self.session
            .as_ref()
            .map(Session::is_keyboard_captured)
            .unwrap_or(false)
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut Overlay {
        &mut self.overlay
    }

    /// Opens the viewer at `index` (or jumps there if already open). The
    /// session's index is set immediately; it never waits for the load.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidContext`] when the gallery is empty or `index` is out
    /// of range.
    pub fn activate(&mut self, index: usize) -> Result<Effect> {
        if self.gallery.is_empty() {
            return Err(Error::InvalidContext(
                "cannot activate a viewer over an empty gallery".into(),
            ));
        }
        if index >= self.gallery.len() {
            return Err(Error::InvalidContext(format!(
                "activation index {} out of range for {} items",
                index,
                self.gallery.len()
            )));
        }

        match &mut self.session {
            Some(session) => {
                session.current_index = index;
            }
            None => {
                self.sessions_started += 1;
                self.session = Some(Session {
                    current_index: index,
                    keyboard_captured: true,
                    id: self.sessions_started,
                });
                self.overlay.mount();
            }
        }

        Ok(Effect::Load(self.request_for(index)))
    }

    /// Advances to the next item, wrapping past the end. No-op while closed.
    pub fn next(&mut self) -> Effect {
        self.step(1)
    }

    /// Steps back to the previous item, wrapping past the start. No-op while
    /// closed.
    pub fn prev(&mut self) -> Effect {
        let len = self.gallery.len();
        self.step(len.saturating_sub(1))
    }

    fn step(&mut self, offset: usize) -> Effect {
        let len = self.gallery.len();
        let Some(session) = &mut self.session else {
            return Effect::None;
        };
        debug_assert!(len > 0, "open session over an empty gallery");

        session.current_index = (session.current_index + offset) % len;
        let index = session.current_index;
        Effect::Load(self.request_for(index))
    }

    /// Closes the viewer: unmounts the overlay, releases keyboard capture
    /// and invalidates outstanding load requests. Idempotent.
    pub fn close(&mut self) {
        if self.session.take().is_some() {
            self.overlay.unmount();
        }
    }

    /// Handles a key press. Only while open are left/right/escape consumed;
    /// everything else passes through untouched.
    pub fn handle_key(&mut self, key: Key) -> KeyResponse {
        if !self.is_keyboard_captured() {
            return KeyResponse::ignored();
        }

        match key {
            Key::ArrowLeft => KeyResponse {
                effect: self.prev(),
                consumed: true,
            },
            Key::ArrowRight => KeyResponse {
                effect: self.next(),
                consumed: true,
            },
            Key::Escape => {
                self.close();
                KeyResponse {
                    effect: Effect::None,
                    consumed: true,
                }
            }
            Key::Other => KeyResponse::ignored(),
        }
    }

    /// A click on the glass backdrop closes the viewer.
    pub fn glass_clicked(&mut self) {
        self.close();
    }

    /// A click on the displayed image advances, equivalent to the next
    /// control.
    pub fn figure_clicked(&mut self) -> Effect {
        self.next()
    }

    /// Dispatches an overlay control activation.
    pub fn control_activated(&mut self, kind: ControlKind) -> Effect {
        match kind {
            ControlKind::Previous => self.prev(),
            ControlKind::Next => self.next(),
            ControlKind::Close => {
                self.close();
                Effect::None
            }
        }
    }

    /// Applies a completed load to the overlay, unless it is stale: a
    /// completion whose session has ended, or whose requested index no
    /// longer matches the session's current index, is discarded without
    /// mutating the overlay. Returns whether the completion was applied.
    pub fn complete_load(&mut self, completion: LoadCompletion) -> bool {
        let Some(session) = &self.session else {
            return false;
        };
        if completion.request.session != session.id
            || completion.request.requested_index != session.current_index
        {
            return false;
        }

        let caption = self
            .gallery
            .get(session.current_index)
            .map(|item| item.caption.clone())
            .unwrap_or_default();
        self.overlay.display(completion.image, &caption);
        true
    }

    /// Frame geometry for the current viewport, derived fresh per call.
    /// `None` while closed.
    pub fn layout(&self, viewport: Viewport) -> Option<LayoutResult> {
        self.session.as_ref().map(|_| self.overlay.layout(viewport))
    }

    fn request_for(&self, index: usize) -> LoadRequest {
        let source = self
            .gallery
            .get(index)
            .map(|item| item.source.clone())
            .unwrap_or_default();
        let session = self.session.as_ref().map(|s| s.id).unwrap_or_default();

        LoadRequest {
            source,
            requested_index: index,
            session,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::GalleryItem;
    use crate::loader::ImageData;
    use std::path::PathBuf;

    fn gallery(count: usize) -> Gallery {
        let items = (0..count)
            .map(|i| GalleryItem {
                source: PathBuf::from(format!("/gallery/{i}.png")),
                caption: format!("Item {i}"),
                marker: "lightbox".into(),
            })
            .collect();
        Gallery::from_items(items)
    }

    fn lightbox(count: usize) -> Lightbox {
        Lightbox::new(gallery(count), Config::default(), &Capabilities::detect())
            .expect("construction should succeed")
    }

    fn image(width: u32, height: u32) -> ImageData {
        ImageData::from_rgba(width, height, vec![255_u8; (width * height * 4) as usize])
    }

    fn completion(request: LoadRequest, width: u32, height: u32) -> LoadCompletion {
        LoadCompletion {
            request,
            image: image(width, height),
        }
    }

    fn expect_load(effect: Effect) -> LoadRequest {
        match effect {
            Effect::Load(request) => request,
            Effect::None => panic!("expected a load effect"),
        }
    }

    #[test]
    fn construction_fails_fast_on_missing_capability() {
        let caps = Capabilities {
            image_presentation: false,
            ..Capabilities::detect()
        };
        let result = Lightbox::new(gallery(2), Config::default(), &caps);
        assert!(matches!(result, Err(Error::EnvironmentUnsupported(_))));
    }

    #[test]
    fn starts_closed_without_session() {
        let lb = lightbox(3);
        assert!(!lb.is_open());
        assert_eq!(lb.current_index(), None);
        assert!(!lb.is_keyboard_captured());
    }

    #[test]
    fn activation_opens_session_and_issues_load() {
        let mut lb = lightbox(3);
        let effect = lb.activate(1).expect("activation should succeed");

        assert!(lb.is_open());
        assert_eq!(lb.current_index(), Some(1));
        assert!(lb.is_keyboard_captured());
        assert!(lb.overlay().is_mounted());

        let request = expect_load(effect);
        assert_eq!(request.requested_index, 1);
        assert_eq!(request.source, PathBuf::from("/gallery/1.png"));
    }

    #[test]
    fn activation_sets_index_before_load_completes() {
        let mut lb = lightbox(3);
        let _ = lb.activate(2).expect("activation should succeed");
        // index is navigation state, independent of the pending load
        assert_eq!(lb.current_index(), Some(2));
        assert!(lb.overlay().image().is_none());
    }

    #[test]
    fn activating_empty_gallery_is_invalid_context() {
        let mut lb = lightbox(0);
        assert!(matches!(lb.activate(0), Err(Error::InvalidContext(_))));
        assert!(!lb.is_open());
    }

    #[test]
    fn activating_out_of_range_index_is_invalid_context() {
        let mut lb = lightbox(3);
        assert!(matches!(lb.activate(3), Err(Error::InvalidContext(_))));
        assert!(!lb.is_open());
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let mut lb = lightbox(3);
        let _ = lb.activate(2).expect("activation should succeed");

        let request = expect_load(lb.next());
        assert_eq!(lb.current_index(), Some(0));
        assert_eq!(request.requested_index, 0);

        let request = expect_load(lb.prev());
        assert_eq!(lb.current_index(), Some(2));
        assert_eq!(request.requested_index, 2);
    }

    #[test]
    fn next_called_item_count_times_returns_to_start() {
        for count in 1..=5 {
            for start in 0..count {
                let mut lb = lightbox(count);
                let _ = lb.activate(start).expect("activation should succeed");
                for _ in 0..count {
                    let _ = lb.next();
                }
                assert_eq!(lb.current_index(), Some(start), "N={count}, start={start}");
            }
        }
    }

    #[test]
    fn prev_undoes_next_from_any_index() {
        for start in 0..4 {
            let mut lb = lightbox(4);
            let _ = lb.activate(start).expect("activation should succeed");
            let _ = lb.next();
            let _ = lb.prev();
            assert_eq!(lb.current_index(), Some(start));
        }
    }

    #[test]
    fn single_item_gallery_navigation_is_identity() {
        let mut lb = lightbox(1);
        let _ = lb.activate(0).expect("activation should succeed");

        let _ = lb.next();
        assert_eq!(lb.current_index(), Some(0));
        let _ = lb.prev();
        assert_eq!(lb.current_index(), Some(0));
    }

    #[test]
    fn navigation_while_closed_is_a_no_op() {
        let mut lb = lightbox(3);
        assert_eq!(lb.next(), Effect::None);
        assert_eq!(lb.prev(), Effect::None);
        assert!(!lb.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut lb = lightbox(3);
        let _ = lb.activate(0).expect("activation should succeed");

        lb.close();
        assert!(!lb.is_open());
        assert!(!lb.overlay().is_mounted());

        lb.close();
        assert!(!lb.is_open());
        assert!(!lb.overlay().is_mounted());
    }

    #[test]
    fn matching_load_completion_updates_overlay() {
        let mut lb = lightbox(3);
        let request = expect_load(lb.activate(1).expect("activation should succeed"));

        assert!(lb.complete_load(completion(request, 400, 300)));
        assert_eq!(lb.overlay().caption(), "Item 1");
        assert!(lb.overlay().image().is_some());
    }

    #[test]
    fn superseded_load_is_discarded() {
        let mut lb = lightbox(3);
        let request_a = expect_load(lb.activate(0).expect("activation should succeed"));
        let request_b = expect_load(lb.next());

        // B's load completes first and is applied
        assert!(lb.complete_load(completion(request_b, 200, 100)));
        // A's slow load arrives afterwards and must not overwrite B
        assert!(!lb.complete_load(completion(request_a, 900, 900)));

        assert_eq!(lb.current_index(), Some(1));
        let displayed = lb.overlay().image().expect("image should be displayed");
        assert_eq!(displayed.width, 200);
        assert_eq!(lb.overlay().caption(), "Item 1");
    }

    #[test]
    fn completion_after_close_is_discarded() {
        let mut lb = lightbox(3);
        let request = expect_load(lb.activate(0).expect("activation should succeed"));
        lb.close();

        assert!(!lb.complete_load(completion(request, 100, 100)));
        assert!(!lb.overlay().is_mounted());
        assert!(lb.overlay().image().is_none());
    }

    #[test]
    fn completion_from_previous_session_is_discarded() {
        let mut lb = lightbox(3);
        let stale = expect_load(lb.activate(0).expect("activation should succeed"));
        lb.close();
        let _ = lb.activate(0).expect("reactivation should succeed");

        // same index, but the session that issued the request has ended
        assert!(!lb.complete_load(completion(stale, 100, 100)));
        assert!(lb.overlay().image().is_none());
    }

    #[test]
    fn arrow_keys_navigate_and_are_consumed() {
        let mut lb = lightbox(3);
        let _ = lb.activate(0).expect("activation should succeed");

        let response = lb.handle_key(Key::ArrowRight);
        assert!(response.consumed);
        assert_eq!(lb.current_index(), Some(1));

        let response = lb.handle_key(Key::ArrowLeft);
        assert!(response.consumed);
        assert_eq!(lb.current_index(), Some(0));
    }

    #[test]
    fn escape_closes_and_releases_keyboard() {
        let mut lb = lightbox(3);
        let _ = lb.activate(0).expect("activation should succeed");

        let response = lb.handle_key(Key::Escape);
        assert!(response.consumed);
        assert_eq!(response.effect, Effect::None);
        assert!(!lb.is_open());
        assert!(!lb.is_keyboard_captured());
    }

    #[test]
    fn unrelated_keys_pass_through() {
        let mut lb = lightbox(3);
        let _ = lb.activate(0).expect("activation should succeed");

        let response = lb.handle_key(Key::Other);
        assert!(!response.consumed);
        assert_eq!(lb.current_index(), Some(0));
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut lb = lightbox(3);
        let response = lb.handle_key(Key::ArrowRight);
        assert!(!response.consumed);
        assert_eq!(response.effect, Effect::None);
    }

    #[test]
    fn glass_click_closes() {
        let mut lb = lightbox(3);
        let _ = lb.activate(0).expect("activation should succeed");
        lb.glass_clicked();
        assert!(!lb.is_open());
    }

    #[test]
    fn figure_click_advances() {
        let mut lb = lightbox(3);
        let _ = lb.activate(0).expect("activation should succeed");
        let request = expect_load(lb.figure_clicked());
        assert_eq!(request.requested_index, 1);
    }

    #[test]
    fn controls_map_to_transitions() {
        let mut lb = lightbox(3);
        let _ = lb.activate(1).expect("activation should succeed");

        let _ = lb.control_activated(ControlKind::Next);
        assert_eq!(lb.current_index(), Some(2));

        let _ = lb.control_activated(ControlKind::Previous);
        assert_eq!(lb.current_index(), Some(1));

        let _ = lb.control_activated(ControlKind::Close);
        assert!(!lb.is_open());
    }

    #[test]
    fn layout_is_none_while_closed() {
        let lb = lightbox(3);
        assert!(lb.layout(Viewport::new(1000.0, 800.0)).is_none());
    }

    #[test]
    fn resize_recenters_without_new_load() {
        let mut lb = lightbox(3);
        let request = expect_load(lb.activate(0).expect("activation should succeed"));
        assert!(lb.complete_load(completion(request, 400, 300)));

        let before = lb
            .layout(Viewport::new(1000.0, 800.0))
            .expect("open viewer should lay out");
        let after = lb
            .layout(Viewport::new(1400.0, 800.0))
            .expect("open viewer should lay out");

        assert_eq!(before.width, after.width);
        assert_eq!(after.left, 500.0);
    }

    #[test]
    fn activating_while_open_jumps_in_same_session() {
        let mut lb = lightbox(4);
        let first = expect_load(lb.activate(0).expect("activation should succeed"));
        let second = expect_load(lb.activate(3).expect("activation should succeed"));

        assert_eq!(first.session, second.session);
        assert_eq!(lb.current_index(), Some(3));
    }
}
