//! Shared test utilities for the cardinal test suite.
//!
//! Recording doubles for every host seam (scroll strip, tab display, HTTP
//! transport, form surface) plus the fixtures most tests start from.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut strip = packages_strip();
//! let mut display = RecordingDisplay::default();
//! let controller = CarouselController::init(&mut strip, &mut display, &config, now)?;
//! assert_eq!(display.tabs, vec!["web"]);
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use crate::carousel::geometry::{self, ItemGeometry, Viewport};
use crate::carousel::{FixedStrip, ScrollBehavior, ScrollStrip, TabDisplay};
use crate::contact::{FormData, FormSurface, Status, SubmissionRequest, Transport, TransportError};

// =========================================================================
// Carousel doubles
// =========================================================================

/// A programmatic scroll issued by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollCall {
    To(f64, ScrollBehavior),
    By(f64, ScrollBehavior),
}

/// A [`FixedStrip`] that records every scroll the controller asks for.
#[derive(Debug, Clone)]
pub struct RecordingStrip {
    pub inner: FixedStrip,
    pub calls: Vec<ScrollCall>,
}

impl RecordingStrip {
    pub fn new(inner: FixedStrip) -> Self {
        Self {
            inner,
            calls: Vec::new(),
        }
    }

    /// Scroll so item `index` is centered, as the user would. Not recorded.
    pub fn center_item(&mut self, index: usize) {
        let left = geometry::center_offset(self.inner.item_geometry(index), self.inner.viewport().width);
        self.inner.scroll_to(left, ScrollBehavior::Smooth);
    }

    pub fn scroll_left(&self) -> f64 {
        self.inner.scroll_left()
    }
}

impl ScrollStrip for RecordingStrip {
    fn item_count(&self) -> usize {
        self.inner.item_count()
    }

    fn item_geometry(&self, index: usize) -> ItemGeometry {
        self.inner.item_geometry(index)
    }

    fn item_tab(&self, index: usize) -> Option<&str> {
        self.inner.item_tab(index)
    }

    fn viewport(&self) -> Viewport {
        self.inner.viewport()
    }

    fn has_controls(&self) -> bool {
        self.inner.has_controls()
    }

    fn scroll_to(&mut self, left: f64, behavior: ScrollBehavior) {
        self.calls.push(ScrollCall::To(left, behavior));
        self.inner.scroll_to(left, behavior);
    }

    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior) {
        self.calls.push(ScrollCall::By(delta, behavior));
        self.inner.scroll_by(delta, behavior);
    }

    fn set_focused(&mut self, index: usize, focused: bool) {
        self.inner.set_focused(index, focused);
    }
}

/// Records every tab id the controller shows.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    pub tabs: Vec<String>,
}

impl TabDisplay for RecordingDisplay {
    fn show_tab(&mut self, tab: &str) {
        self.tabs.push(tab.to_string());
    }
}

/// The packages strip: mix, web, seo, ai, padded with boundary clones.
///
/// Item midpoints (padded indices 0..=5): 215, 348, 466, 579, 707, 840.
pub fn packages_strip() -> RecordingStrip {
    let tabs: Vec<String> = ["mix", "web", "seo", "ai"].iter().map(|s| s.to_string()).collect();
    let inner = FixedStrip::padded(&[120.0, 100.0, 110.0, 130.0], &tabs, 8.0, 300.0).with_inset(150.0);
    RecordingStrip::new(inner)
}

// =========================================================================
// Contact doubles
// =========================================================================

/// Scripted [`Transport`]: answers with queued responses in order and
/// records every request. Once the script runs out, every send fails.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<u16, TransportError>>>,
    requests: Mutex<Vec<SubmissionRequest>>,
}

impl MockTransport {
    pub fn with_responses(responses: Vec<Result<u16, TransportError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<SubmissionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &SubmissionRequest) -> Result<u16, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".into())))
    }
}

/// One observable change on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Busy(bool),
    Status(Status),
    Reset,
    Open(String),
    Wait(Duration),
}

/// Records what the pipeline did to the form, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub events: Vec<SurfaceEvent>,
    pub busy: bool,
    pub opened: Vec<String>,
}

impl RecordingSurface {
    pub fn statuses(&self) -> Vec<Status> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Status(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn last_status(&self) -> Option<Status> {
        self.statuses().last().copied()
    }

    pub fn was_reset(&self) -> bool {
        self.events.contains(&SurfaceEvent::Reset)
    }
}

impl FormSurface for RecordingSurface {
    fn set_status(&mut self, status: Status) {
        self.events.push(SurfaceEvent::Status(status));
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        self.events.push(SurfaceEvent::Busy(busy));
    }

    fn reset(&mut self) {
        self.events.push(SurfaceEvent::Reset);
    }

    fn open_mail_client(&mut self, uri: &str) {
        self.opened.push(uri.to_string());
        self.events.push(SurfaceEvent::Open(uri.to_string()));
    }

    fn wait(&mut self, delay: Duration) {
        self.events.push(SurfaceEvent::Wait(delay));
    }
}

/// A complete, human-filled form.
pub fn ann_form() -> FormData {
    FormData::new()
        .with("name", "Ann")
        .with("email", "a@x.com")
        .with("message", "Hi")
}
