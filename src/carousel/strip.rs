//! The scroll container seam.
//!
//! [`ScrollStrip`] is everything the controller needs from the host page: live
//! geometry, the tab id each item carries, scroll primitives, and a way to
//! toggle the focus presentation of an item. A browser binding implements it
//! over the real DOM; [`FixedStrip`] implements it (and the bounded
//! [`ScrollTrack`] extension) over a fixed row of widths and is what the CLI
//! and the tests drive.

use super::geometry::{ItemGeometry, Viewport};
use super::track::{ButtonState, ScrollTrack};

/// How a programmatic scroll moves the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump without animation. Used for the initial centering and teleports.
    Instant,
    /// Animated scroll. Used for arrow and keyboard navigation.
    Smooth,
}

/// A horizontally scrolling container holding an ordered row of items.
///
/// Item indices are positions in the rendered (clone-padded) sequence. The
/// controller never adds or removes items; it only reads them.
pub trait ScrollStrip {
    /// Number of rendered items, clones included.
    fn item_count(&self) -> usize;

    /// Current geometry of item `index`, measured on demand.
    fn item_geometry(&self, index: usize) -> ItemGeometry;

    /// Tab identifier the item triggers (`data-tab`), if any.
    fn item_tab(&self, index: usize) -> Option<&str>;

    /// Current scroll offset and visible width.
    fn viewport(&self) -> Viewport;

    /// Whether the previous/next controls for this strip exist.
    fn has_controls(&self) -> bool;

    fn scroll_to(&mut self, left: f64, behavior: ScrollBehavior);

    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior);

    /// Toggle the "centered card" presentation of an item.
    fn set_focused(&mut self, index: usize, focused: bool);
}

/// An in-memory strip: items laid out back to back with a fixed gap.
///
/// Scrolls land immediately (a smooth scroll is modelled as already finished)
/// and are clamped to the scrollable range, like a browser would.
#[derive(Debug, Clone)]
pub struct FixedStrip {
    widths: Vec<f64>,
    tabs: Vec<Option<String>>,
    focused: Vec<bool>,
    gap: f64,
    inset: f64,
    viewport_width: f64,
    scroll_left: f64,
    controls: bool,
    buttons: ButtonState,
}

impl FixedStrip {
    /// A strip showing exactly the given items, in order.
    pub fn new(widths: Vec<f64>, gap: f64, viewport_width: f64) -> Self {
        let len = widths.len();
        Self {
            widths,
            tabs: vec![None; len],
            focused: vec![false; len],
            gap,
            inset: 0.0,
            viewport_width,
            scroll_left: 0.0,
            controls: true,
            buttons: ButtonState::default(),
        }
    }

    /// A strip for the given real items, padded the way the site markup pads
    /// them: a clone of the last item in front, a clone of the first at the end.
    ///
    /// `tabs` is matched to `widths` by position; missing tabs stay `None`.
    /// The inset starts at [`centering_inset`](Self::centering_inset) so both
    /// clones can be centered; [`with_inset`](Self::with_inset) overrides it.
    pub fn padded(widths: &[f64], tabs: &[String], gap: f64, viewport_width: f64) -> Self {
        let tab_at = |i: usize| tabs.get(i).cloned();
        let mut padded_widths = Vec::with_capacity(widths.len() + 2);
        let mut padded_tabs = Vec::with_capacity(widths.len() + 2);

        if let (Some(&first), Some(&last)) = (widths.first(), widths.last()) {
            padded_widths.push(last);
            padded_tabs.push(tab_at(widths.len() - 1));
            for (i, &w) in widths.iter().enumerate() {
                padded_widths.push(w);
                padded_tabs.push(tab_at(i));
            }
            padded_widths.push(first);
            padded_tabs.push(tab_at(0));
        }

        let mut strip = Self::new(padded_widths, gap, viewport_width);
        strip.tabs = padded_tabs;
        strip.inset = strip.centering_inset();
        strip
    }

    /// Smallest inset that lets the first and last items reach the viewport
    /// center.
    ///
    /// Scrolling is clamped to `0..=max`, so an end item narrower than the
    /// viewport can only be centered with at least half the leftover width as
    /// padding in front of it (and behind the other end).
    pub fn centering_inset(&self) -> f64 {
        let narrowest = match (self.widths.first(), self.widths.last()) {
            (Some(&first), Some(&last)) => first.min(last),
            _ => return 0.0,
        };
        ((self.viewport_width - narrowest) / 2.0).max(0.0)
    }

    /// Leading/trailing padding inside the container, in pixels.
    pub fn with_inset(mut self, inset: f64) -> Self {
        self.inset = inset;
        self
    }

    /// Drop the previous/next controls, as when the markup omits them.
    pub fn without_controls(mut self) -> Self {
        self.controls = false;
        self
    }

    /// Resize the visible area, e.g. to mimic a window resize.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
        self.scroll_left = self.clamp(self.scroll_left);
    }

    /// Resize one item, e.g. to mimic a reflow.
    pub fn set_item_width(&mut self, index: usize, width: f64) {
        if let Some(w) = self.widths.get_mut(index) {
            *w = width;
        }
    }

    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    /// Button state last applied by a track controller.
    pub fn buttons(&self) -> ButtonState {
        self.buttons
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused.get(index).copied().unwrap_or(false)
    }

    /// Total scrollable width, insets included.
    pub fn content_width(&self) -> f64 {
        let items: f64 = self.widths.iter().sum();
        let gaps = self.gap * self.widths.len().saturating_sub(1) as f64;
        items + gaps + 2.0 * self.inset
    }

    fn max_scroll(&self) -> f64 {
        (self.content_width() - self.viewport_width).max(0.0)
    }

    fn clamp(&self, left: f64) -> f64 {
        left.clamp(0.0, self.max_scroll())
    }
}

impl ScrollStrip for FixedStrip {
    fn item_count(&self) -> usize {
        self.widths.len()
    }

    fn item_geometry(&self, index: usize) -> ItemGeometry {
        let before: f64 = self.widths.iter().take(index).sum();
        let offset = self.inset + before + self.gap * index as f64;
        ItemGeometry::new(offset, self.widths.get(index).copied().unwrap_or(0.0))
    }

    fn item_tab(&self, index: usize) -> Option<&str> {
        self.tabs.get(index).and_then(|t| t.as_deref())
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            scroll_left: self.scroll_left,
            width: self.viewport_width,
        }
    }

    fn has_controls(&self) -> bool {
        self.controls
    }

    fn scroll_to(&mut self, left: f64, _behavior: ScrollBehavior) {
        self.scroll_left = self.clamp(left);
    }

    fn scroll_by(&mut self, delta: f64, _behavior: ScrollBehavior) {
        self.scroll_left = self.clamp(self.scroll_left + delta);
    }

    fn set_focused(&mut self, index: usize, focused: bool) {
        if let Some(f) = self.focused.get_mut(index) {
            *f = focused;
        }
    }
}

impl ScrollTrack for FixedStrip {
    fn scroll_width(&self) -> f64 {
        self.content_width()
    }

    fn set_buttons(&mut self, state: ButtonState) {
        self.buttons = state;
    }
}
