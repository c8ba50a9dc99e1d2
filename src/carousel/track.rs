//! Bounded carousels.
//!
//! A track is a plain horizontal strip with a start and an end: no clones, no
//! teleport, no settle cycle. Its arrows move by most of a page, and each
//! arrow is disabled while the strip sits at that arrow's end. The button
//! state is recomputed from live geometry on every scroll and resize, so the
//! controller keeps no offsets of its own.

use tracing::debug;

use super::controller::Direction;
use super::geometry::Viewport;
use super::strip::{ScrollBehavior, ScrollStrip};
use crate::config::TrackConfig;

/// Which arrow buttons are disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl ButtonState {
    /// Buttons for a container showing `viewport` over `scroll_width` px of
    /// content. The offset is rounded to whole pixels first; within
    /// `tolerance` px of an end counts as being at it.
    pub fn measure(viewport: Viewport, scroll_width: f64, tolerance: f64) -> Self {
        let max_scroll = (scroll_width - viewport.width).max(0.0);
        let current = viewport.scroll_left.round();
        Self {
            prev_disabled: current <= tolerance,
            next_disabled: current >= max_scroll - tolerance,
        }
    }
}

/// A scroll container whose arrows can be disabled.
pub trait ScrollTrack: ScrollStrip {
    /// Total width of the scrollable content.
    fn scroll_width(&self) -> f64;

    /// Apply `state` to the previous/next buttons.
    fn set_buttons(&mut self, state: ButtonState);
}

/// Controller for one bounded strip.
#[derive(Debug, Clone)]
pub struct TrackController {
    min_step: f64,
    page_fraction: f64,
    tolerance: f64,
    buttons: ButtonState,
}

impl TrackController {
    /// Take control of `track` and set its initial button state.
    ///
    /// A track without buttons still scrolls with the keyboard; its button
    /// state is tracked but never applied.
    pub fn attach<T: ScrollTrack + ?Sized>(track: &mut T, config: &TrackConfig) -> Self {
        let mut controller = Self {
            min_step: config.min_step,
            page_fraction: config.page_fraction,
            tolerance: config.edge_tolerance,
            buttons: ButtonState::default(),
        };
        controller.refresh(track);
        controller
    }

    /// Button state as of the last scroll, resize or attach.
    pub fn buttons(&self) -> ButtonState {
        self.buttons
    }

    /// One arrow step for a container `visible_width` px wide.
    pub fn step_width(&self, visible_width: f64) -> f64 {
        (visible_width * self.page_fraction).floor().max(self.min_step)
    }

    /// Scroll one page in `direction` with a smooth animation. Returns the
    /// signed scroll delta.
    ///
    /// The buttons are not touched here; the scroll event the movement
    /// produces updates them through [`on_scroll`](Self::on_scroll).
    pub fn step<T: ScrollTrack + ?Sized>(&mut self, track: &mut T, direction: Direction) -> f64 {
        let delta = direction.sign() * self.step_width(track.viewport().width);
        debug!(delta, "track step");
        track.scroll_by(delta, ScrollBehavior::Smooth);
        delta
    }

    /// Handle a key press while the track has focus.
    ///
    /// Returns `true` when the key was consumed; the caller must then suppress
    /// the browser's default scrolling for it.
    pub fn on_key<T: ScrollTrack + ?Sized>(&mut self, track: &mut T, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.step(track, direction);
                true
            }
            None => false,
        }
    }

    pub fn on_scroll<T: ScrollTrack + ?Sized>(&mut self, track: &mut T) -> ButtonState {
        self.refresh(track)
    }

    pub fn on_resize<T: ScrollTrack + ?Sized>(&mut self, track: &mut T) -> ButtonState {
        self.refresh(track)
    }

    fn refresh<T: ScrollTrack + ?Sized>(&mut self, track: &mut T) -> ButtonState {
        self.buttons = ButtonState::measure(track.viewport(), track.scroll_width(), self.tolerance);
        if track.has_controls() {
            track.set_buttons(self.buttons);
        }
        self.buttons
    }
}
