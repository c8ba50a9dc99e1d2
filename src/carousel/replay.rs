//! Scripted carousel sessions.
//!
//! [`replay`] runs a controller over a [`FixedStrip`] the way a browser would
//! drive it: each event is followed by the scroll event it causes and by a
//! full settle window, so every frame shows the state after scrolling paused.
//! [`replay_track`] does the same for a bounded track, reporting the arrow
//! buttons instead. Used by the `carousel` and `track` CLI commands and by
//! tests exercising whole sessions.

use std::str::FromStr;
use std::time::{Duration, Instant};

use thiserror::Error;

use super::controller::{CarouselController, Direction, LayoutUnavailable, SettleOutcome};
use super::strip::{FixedStrip, ScrollBehavior, ScrollStrip};
use super::track::{ButtonState, TrackController};
use crate::config::{CarouselConfig, TrackConfig};

/// Virtual time between consecutive events, on top of the settle window.
const EVENT_SPACING: Duration = Duration::from_millis(10);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid strip event {0:?}: expected scroll:<px>, resize:<px>, key:<name>, next or prev")]
pub struct InvalidEvent(String);

/// One user or environment action.
#[derive(Debug, Clone, PartialEq)]
pub enum StripEvent {
    /// The user scrolls the strip to an absolute offset.
    Scroll(f64),
    /// Arrow button.
    Step(Direction),
    /// Key press while the strip has focus.
    Key(String),
    /// The viewport changes width.
    Resize(f64),
}

impl FromStr for StripEvent {
    type Err = InvalidEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidEvent(s.to_string());
        let px = |v: &str| v.trim().parse::<f64>().map_err(|_| invalid());
        match s.trim().split_once(':') {
            Some(("scroll", v)) => Ok(StripEvent::Scroll(px(v)?)),
            Some(("resize", v)) => Ok(StripEvent::Resize(px(v)?)),
            Some(("key", v)) if !v.trim().is_empty() => Ok(StripEvent::Key(v.trim().to_string())),
            None if s.trim() == "next" => Ok(StripEvent::Step(Direction::Next)),
            None if s.trim() == "prev" => Ok(StripEvent::Step(Direction::Prev)),
            _ => Err(invalid()),
        }
    }
}

/// State after one event and the settle window that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayFrame {
    pub event: StripEvent,
    /// Scroll offset once everything settled.
    pub scroll_left: f64,
    pub centered: usize,
    pub settle: Option<SettleOutcome>,
    /// Tab ids handed to the display during this frame.
    pub shown: Vec<String>,
}

/// A full session: the initial centering, then one frame per event.
#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    pub initial_index: usize,
    pub initial_shown: Vec<String>,
    pub frames: Vec<ReplayFrame>,
}

/// Initialize a controller on `strip` and play `events` through it.
pub fn replay(
    strip: &mut FixedStrip,
    config: &CarouselConfig,
    events: &[StripEvent],
) -> Result<Replay, LayoutUnavailable> {
    let mut shown: Vec<String> = Vec::new();
    let mut display = |tab: &str| shown.push(tab.to_string());

    let mut now = Instant::now();
    let mut controller = CarouselController::init(strip, &mut display, config, now)?;
    now += config.initial_settle();
    controller.tick(strip, &mut display, now);

    let initial_index = controller.centered_index();
    let initial_shown = std::mem::take(&mut shown);
    let mut frames = Vec::with_capacity(events.len());

    for event in events {
        now += EVENT_SPACING;
        let before = strip.scroll_left();
        let mut display = |tab: &str| shown.push(tab.to_string());

        match event {
            StripEvent::Scroll(left) => strip.scroll_to(*left, ScrollBehavior::Smooth),
            StripEvent::Step(direction) => {
                controller.step(strip, *direction);
            }
            StripEvent::Key(key) => {
                controller.on_key(strip, key);
            }
            StripEvent::Resize(width) => strip.set_viewport_width(*width),
        }
        if strip.scroll_left() != before {
            controller.on_scroll(strip, now);
        }

        now += config.settle_delay();
        let settle = controller.tick(strip, &mut display, now);

        if matches!(settle, Some(SettleOutcome::Teleported { .. })) {
            // The browser reports the teleport's own scroll afterwards
            now += EVENT_SPACING;
            controller.on_scroll(strip, now);
            now += config.settle_delay();
            controller.tick(strip, &mut display, now);
        }

        frames.push(ReplayFrame {
            event: event.clone(),
            scroll_left: strip.scroll_left(),
            centered: controller.live_index(strip),
            settle,
            shown: std::mem::take(&mut shown),
        });
    }

    Ok(Replay {
        initial_index,
        initial_shown,
        frames,
    })
}

/// Track state after one event.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackFrame {
    pub event: StripEvent,
    pub scroll_left: f64,
    pub buttons: ButtonState,
}

/// A bounded-track session: the buttons on attach, then one frame per event.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackReplay {
    pub initial: ButtonState,
    pub frames: Vec<TrackFrame>,
}

/// Attach a track controller to `strip` and play `events` through it.
///
/// Every event is followed by the scroll or resize notification the browser
/// would send, so each frame carries the refreshed button state.
pub fn replay_track(strip: &mut FixedStrip, config: &TrackConfig, events: &[StripEvent]) -> TrackReplay {
    let mut controller = TrackController::attach(strip, config);
    let initial = controller.buttons();

    let frames = events
        .iter()
        .map(|event| {
            let buttons = match event {
                StripEvent::Scroll(left) => {
                    strip.scroll_to(*left, ScrollBehavior::Smooth);
                    controller.on_scroll(strip)
                }
                StripEvent::Step(direction) => {
                    controller.step(strip, *direction);
                    controller.on_scroll(strip)
                }
                StripEvent::Key(key) => {
                    controller.on_key(strip, key);
                    controller.on_scroll(strip)
                }
                StripEvent::Resize(width) => {
                    strip.set_viewport_width(*width);
                    controller.on_resize(strip)
                }
            };
            TrackFrame {
                event: event.clone(),
                scroll_left: strip.scroll_left(),
                buttons,
            }
        })
        .collect();

    TrackReplay { initial, frames }
}
