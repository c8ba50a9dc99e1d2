//! The infinite carousel state machine.
//!
//! ```text
//! init ──► CenteringInitial ──(initial_settle elapsed)──► Idle ◄────────────┐
//!                                                          │ ▲               │
//!                                           scroll event   │ │ interior:     │ scroll event
//!                                                          ▼ │ notify        │ at the landing
//!                                                        Settling            │ offset
//!                                                          │                 │
//!                                  boundary clone centered │ instant jump    │
//!                                                          ▼ to the real item│
//!                                                       Teleporting ─────────┘
//! ```
//!
//! A scroll event anywhere else while `Teleporting` is a user scroll and arms
//! the settle timer as usual.
//!
//! The controller owns no geometry. Every decision re-reads the strip, so
//! resizes and reflows between events never leave it with stale offsets.
//! Time is passed in by the caller (`now`), which keeps the debounce fully
//! deterministic under test.

use std::time::Instant;

use thiserror::Error;
use tracing::debug;

use super::debounce::Debounce;
use super::geometry::{self, ItemGeometry};
use super::strip::{ScrollBehavior, ScrollStrip};
use super::tabs::TabDisplay;
use crate::config::CarouselConfig;

/// Why a strip could not be turned into a carousel.
///
/// Missing markup is expected on pages without a carousel, so callers treat
/// this as "do nothing", not as a fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutUnavailable {
    #[error("carousel controls are missing")]
    MissingControls,
    #[error("carousel has no items")]
    NoItems,
    #[error("carousel needs a clone at each end, found only {0} items")]
    MissingPadding(usize),
}

/// One rendered item as seen at initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselItem {
    pub index: usize,
    /// Boundary duplicate that only exists to hide the teleport.
    pub is_clone: bool,
    pub tab: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// The initial jump happened; scroll logic is off until `enable_at`.
    CenteringInitial { enable_at: Instant },
    Idle,
    /// A scroll event armed the settle timer.
    Settling,
    /// The strip jumped off a boundary clone and landed at `landed_at`.
    /// The scroll event reporting that landing is already resolved.
    Teleporting { landed_at: f64 },
}

/// What a settle cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettleOutcome {
    /// Scrolling stopped on a real item.
    Settled { index: usize },
    /// Scrolling stopped on a clone and was silently moved to the real item.
    Teleported { from: usize, to: usize },
}

impl SettleOutcome {
    /// The index centered once the cycle completes.
    pub fn centered(&self) -> usize {
        match *self {
            SettleOutcome::Settled { index } => index,
            SettleOutcome::Teleported { to, .. } => to,
        }
    }
}

/// Arrow / keyboard navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Map a keyboard key name (`KeyboardEvent.key`) to a direction.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Prev),
            "ArrowRight" => Some(Direction::Next),
            _ => None,
        }
    }

    pub(crate) fn sign(self) -> f64 {
        match self {
            Direction::Prev => -1.0,
            Direction::Next => 1.0,
        }
    }
}

/// Controller for one clone-padded strip.
#[derive(Debug, Clone)]
pub struct CarouselController {
    items: Vec<CarouselItem>,
    phase: Phase,
    settle: Debounce,
    centered_index: usize,
    gap: f64,
    fallback_step: f64,
}

impl CarouselController {
    /// Take control of `strip` and center the initial item without animation.
    ///
    /// The strip must already be padded: `[clone_last, real_1 .. real_N,
    /// clone_first]`. The initial item is the real item carrying
    /// `config.initial_tab`, else the padded `config.initial_index` clamped
    /// into `1..=N`. Scroll-driven logic stays suppressed until
    /// `config.initial_settle` has elapsed (see [`tick`](Self::tick)).
    pub fn init<S, D>(
        strip: &mut S,
        display: &mut D,
        config: &CarouselConfig,
        now: Instant,
    ) -> Result<Self, LayoutUnavailable>
    where
        S: ScrollStrip + ?Sized,
        D: TabDisplay + ?Sized,
    {
        if !strip.has_controls() {
            return Err(LayoutUnavailable::MissingControls);
        }
        let len = strip.item_count();
        if len == 0 {
            return Err(LayoutUnavailable::NoItems);
        }
        if len < 3 {
            return Err(LayoutUnavailable::MissingPadding(len));
        }

        let items: Vec<CarouselItem> = (0..len)
            .map(|index| CarouselItem {
                index,
                is_clone: index == 0 || index == len - 1,
                tab: strip.item_tab(index).map(str::to_string),
            })
            .collect();

        let initial = config
            .initial_tab
            .as_deref()
            .and_then(|tab| {
                items
                    .iter()
                    .find(|item| !item.is_clone && item.tab.as_deref() == Some(tab))
            })
            .map(|item| item.index)
            .unwrap_or_else(|| config.initial_index.clamp(1, len - 2));

        let mut controller = Self {
            items,
            phase: Phase::CenteringInitial {
                enable_at: now + config.initial_settle(),
            },
            settle: Debounce::new(config.settle_delay()),
            centered_index: initial,
            gap: config.item_gap,
            fallback_step: config.fallback_step,
        };

        debug!(index = initial, items = len, "centering initial carousel item");
        controller.center_on(strip, initial);
        controller.notify(display, initial);
        controller.update_focus(strip);
        Ok(controller)
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Scroll-driven logic is off until the initial jump has settled.
    pub fn is_scroll_suppressed(&self) -> bool {
        matches!(self.phase, Phase::CenteringInitial { .. })
    }

    /// Index centered by the last settle cycle, teleport, or initialization.
    pub fn centered_index(&self) -> usize {
        self.centered_index
    }

    /// Deadline of the pending settle cycle, if one is armed.
    pub fn settle_deadline(&self) -> Option<Instant> {
        self.settle.deadline()
    }

    /// Index centered right now, measured from the live scroll position.
    pub fn live_index<S: ScrollStrip + ?Sized>(&self, strip: &S) -> usize {
        geometry::centered_index(strip.viewport(), &self.measure(strip)).unwrap_or(0)
    }

    /// Handle a scroll event from the container.
    ///
    /// Focus presentation is refreshed on every event. Settle logic is
    /// (re)armed unless scrolling is suppressed or the event merely reports
    /// the teleport that was already resolved.
    pub fn on_scroll<S: ScrollStrip + ?Sized>(&mut self, strip: &mut S, now: Instant) {
        self.update_focus(strip);

        match self.phase {
            Phase::CenteringInitial { .. } => return,
            Phase::Teleporting { landed_at } => {
                self.phase = Phase::Idle;
                if (strip.viewport().scroll_left - landed_at).abs() < 0.5 {
                    return;
                }
            }
            Phase::Idle | Phase::Settling => {}
        }
        self.settle.arm(now);
        self.phase = Phase::Settling;
    }

    /// Advance timers. Call whenever a deadline may have passed.
    ///
    /// Returns the settle outcome when the debounce window closed without a
    /// newer scroll event.
    pub fn tick<S, D>(&mut self, strip: &mut S, display: &mut D, now: Instant) -> Option<SettleOutcome>
    where
        S: ScrollStrip + ?Sized,
        D: TabDisplay + ?Sized,
    {
        let phase = self.phase;
        match phase {
            Phase::CenteringInitial { enable_at } => {
                if now >= enable_at {
                    debug!("initial carousel jump settled, enabling scroll logic");
                    self.phase = Phase::Idle;
                }
                None
            }
            Phase::Settling if self.settle.fire(now) => Some(self.settle_now(strip, display)),
            _ => None,
        }
    }

    /// Run the settle logic immediately: teleport off a boundary clone, or
    /// tell the display which real item is centered.
    ///
    /// A teleport leaves the controller in [`Phase::Teleporting`] until the
    /// next scroll event; every other outcome returns it to [`Phase::Idle`].
    pub fn settle_now<S, D>(&mut self, strip: &mut S, display: &mut D) -> SettleOutcome
    where
        S: ScrollStrip + ?Sized,
        D: TabDisplay + ?Sized,
    {
        self.settle.cancel();
        let index = self.live_index(strip);

        let outcome = match geometry::teleport_target(index, self.items.len()) {
            Some(target) => {
                debug!(from = index, to = target, "teleporting off boundary clone");
                self.center_on(strip, target);
                self.phase = Phase::Teleporting {
                    landed_at: strip.viewport().scroll_left,
                };
                self.update_focus(strip);
                self.notify(display, target);
                SettleOutcome::Teleported {
                    from: index,
                    to: target,
                }
            }
            None => {
                debug!(index, "carousel settled");
                self.phase = Phase::Idle;
                self.notify(display, index);
                SettleOutcome::Settled { index }
            }
        };

        self.centered_index = outcome.centered();
        outcome
    }

    /// Scroll one item in `direction` with a smooth animation.
    ///
    /// The step is the live centered item's width plus the gap, so strips with
    /// variable-width items stay aligned. Returns the signed scroll delta.
    pub fn step<S: ScrollStrip + ?Sized>(&mut self, strip: &mut S, direction: Direction) -> f64 {
        let index = self.live_index(strip);
        let width = geometry::step_width(Some(strip.item_geometry(index)), self.gap, self.fallback_step);
        let delta = direction.sign() * width;
        debug!(index, delta, "carousel step");
        strip.scroll_by(delta, ScrollBehavior::Smooth);
        delta
    }

    /// Handle a key press while the strip has focus.
    ///
    /// Returns `true` when the key was consumed; the caller must then suppress
    /// the browser's default scrolling for it.
    pub fn on_key<S: ScrollStrip + ?Sized>(&mut self, strip: &mut S, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.step(strip, direction);
                true
            }
            None => false,
        }
    }

    fn measure<S: ScrollStrip + ?Sized>(&self, strip: &S) -> Vec<ItemGeometry> {
        (0..self.items.len()).map(|i| strip.item_geometry(i)).collect()
    }

    fn center_on<S: ScrollStrip + ?Sized>(&mut self, strip: &mut S, index: usize) {
        let left = geometry::center_offset(strip.item_geometry(index), strip.viewport().width);
        strip.scroll_to(left, ScrollBehavior::Instant);
    }

    fn notify<D: TabDisplay + ?Sized>(&self, display: &mut D, index: usize) {
        let real = geometry::real_index(index, self.items.len());
        if let Some(tab) = self.items.get(real).and_then(|item| item.tab.as_deref()) {
            display.show_tab(tab);
        }
    }

    fn update_focus<S: ScrollStrip + ?Sized>(&self, strip: &mut S) {
        let viewport = strip.viewport();
        for i in 0..self.items.len() {
            let focused = geometry::is_focused(viewport, strip.item_geometry(i));
            strip.set_focused(i, focused);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::strip::FixedStrip;
    use crate::test_helpers::{RecordingDisplay, RecordingStrip, ScrollCall, packages_strip};
    use std::time::Duration;

    fn config() -> CarouselConfig {
        CarouselConfig::default()
    }

    /// Initialize and let the initial jump settle.
    fn ready(strip: &mut RecordingStrip, t0: Instant) -> (CarouselController, RecordingDisplay) {
        let mut display = RecordingDisplay::default();
        let mut controller = CarouselController::init(strip, &mut display, &config(), t0).unwrap();
        controller.tick(strip, &mut display, t0 + Duration::from_millis(200));
        assert_eq!(controller.phase(), Phase::Idle);
        strip.calls.clear();
        display.tabs.clear();
        (controller, display)
    }

    /// Center `index` as if the user scrolled there, then let it settle.
    fn scroll_and_settle(
        controller: &mut CarouselController,
        strip: &mut RecordingStrip,
        display: &mut RecordingDisplay,
        index: usize,
        at: Instant,
    ) -> Option<SettleOutcome> {
        strip.center_item(index);
        controller.on_scroll(strip, at);
        controller.tick(strip, display, at + Duration::from_millis(50))
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    #[test]
    fn init_centers_configured_index_without_animation() {
        let t0 = Instant::now();
        let mut strip = packages_strip();
        let mut display = RecordingDisplay::default();
        let controller = CarouselController::init(&mut strip, &mut display, &config(), t0).unwrap();

        assert_eq!(controller.centered_index(), 2);
        assert_eq!(controller.live_index(&strip), 2);
        assert!(matches!(strip.calls[0], ScrollCall::To(_, ScrollBehavior::Instant)));
        assert_eq!(display.tabs, vec!["web"]);
        assert!(controller.is_scroll_suppressed());
    }

    #[test]
    fn init_prefers_initial_tab() {
        let t0 = Instant::now();
        let mut strip = packages_strip();
        let mut display = RecordingDisplay::default();
        let config = CarouselConfig {
            initial_tab: Some("ai".into()),
            ..config()
        };
        let controller = CarouselController::init(&mut strip, &mut display, &config, t0).unwrap();

        // "ai" is real at index 4 and cloned at index 0; the real one wins
        assert_eq!(controller.centered_index(), 4);
        assert_eq!(display.tabs, vec!["ai"]);
    }

    #[test]
    fn init_unknown_tab_falls_back_to_index() {
        let t0 = Instant::now();
        let mut strip = packages_strip();
        let mut display = RecordingDisplay::default();
        let config = CarouselConfig {
            initial_tab: Some("video".into()),
            initial_index: 99,
            ..config()
        };
        let controller = CarouselController::init(&mut strip, &mut display, &config, t0).unwrap();
        // Clamped to the last real item
        assert_eq!(controller.centered_index(), 4);
    }

    #[test]
    fn init_marks_items_and_clones() {
        let mut strip = packages_strip();
        let mut display = RecordingDisplay::default();
        let controller =
            CarouselController::init(&mut strip, &mut display, &config(), Instant::now()).unwrap();
        let clones: Vec<bool> = controller.items().iter().map(|i| i.is_clone).collect();
        assert_eq!(clones, vec![true, false, false, false, false, true]);
    }

    #[test]
    fn init_without_controls_is_unavailable() {
        let mut strip = FixedStrip::new(vec![100.0; 5], 8.0, 300.0).without_controls();
        let mut display = RecordingDisplay::default();
        let result = CarouselController::init(&mut strip, &mut display, &config(), Instant::now());
        assert_eq!(result.unwrap_err(), LayoutUnavailable::MissingControls);
        assert_eq!(strip.scroll_left(), 0.0);
        assert!(display.tabs.is_empty());
    }

    #[test]
    fn init_without_items_is_unavailable() {
        let mut strip = FixedStrip::new(vec![], 8.0, 300.0);
        let mut display = RecordingDisplay::default();
        let result = CarouselController::init(&mut strip, &mut display, &config(), Instant::now());
        assert_eq!(result.unwrap_err(), LayoutUnavailable::NoItems);
    }

    #[test]
    fn init_without_padding_is_unavailable() {
        let mut strip = FixedStrip::new(vec![100.0, 100.0], 8.0, 300.0);
        let mut display = RecordingDisplay::default();
        let result = CarouselController::init(&mut strip, &mut display, &config(), Instant::now());
        assert_eq!(result.unwrap_err(), LayoutUnavailable::MissingPadding(2));
    }

    #[test]
    fn scroll_logic_waits_for_initial_settle() {
        let t0 = Instant::now();
        let mut strip = packages_strip();
        let mut display = RecordingDisplay::default();
        let mut controller = CarouselController::init(&mut strip, &mut display, &config(), t0).unwrap();

        // The initial jump's own scroll event must not arm anything
        controller.on_scroll(&mut strip, t0 + Duration::from_millis(10));
        assert_eq!(controller.settle_deadline(), None);
        assert_eq!(controller.tick(&mut strip, &mut display, t0 + Duration::from_millis(100)), None);
        assert!(matches!(controller.phase(), Phase::CenteringInitial { .. }));

        controller.tick(&mut strip, &mut display, t0 + Duration::from_millis(200));
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(!controller.is_scroll_suppressed());
    }

    // =========================================================================
    // Settle and teleport
    // =========================================================================

    #[test]
    fn settling_on_start_clone_teleports_to_last_real() {
        let t0 = Instant::now();
        let mut strip = packages_strip();
        let (mut controller, mut display) = ready(&mut strip, t0);
        let n = strip.item_count() - 2;

        let outcome = scroll_and_settle(&mut controller, &mut strip, &mut display, 0, t0 + Duration::from_secs(1));

        assert_eq!(outcome, Some(SettleOutcome::Teleported { from: 0, to: n }));
        assert_eq!(controller.live_index(&strip), n);
        assert_eq!(controller.centered_index(), n);
        // The correction itself is a single instant jump
        assert_eq!(strip.calls.len(), 1);
        assert!(matches!(strip.calls[0], ScrollCall::To(_, ScrollBehavior::Instant)));
        assert_eq!(
            controller.phase(),
            Phase::Teleporting {
                landed_at: strip.scroll_left()
            }
        );
    }

    #[test]
    fn settling_on_end_clone_teleports_to_first_real() {
        let t0 = Instant::now();
        let mut strip = packages_strip();
        let (mut controller, mut display) = ready(&mut strip, t0);
        let last = strip.item_count() - 1;

        let outcome =
            scroll_and_settle(&mut controller, &mut strip, &mut display, last, t0 + Duration::from_secs(1));

        assert_eq!(outcome, Some(SettleOutcome::Teleported { from: last, to: 1 }));
        assert_eq!(controller.live_index(&strip), 1);
        assert_eq!(display.tabs, vec!["mix"]);
    }

    #[test]
    fn settling_on_interior_notifies_once_without_teleport() {
        let t0 = Instant::now();
        for k in 1..=4 {
            let mut strip = packages_strip();
            let (mut controller, mut display) = ready(&mut strip, t0);
            let expected = strip.item_tab(k).unwrap().to_string();

            let outcome =
                scroll_and_settle(&mut controller, &mut strip, &mut display, k, t0 + Duration::from_secs(1));

            assert_eq!(outcome, Some(SettleOutcome::Settled { index: k }));
            assert_eq!(display.tabs, vec![expected]);
            assert!(strip.calls.is_empty());
        }
    }

    #[test]
    fn teleport_scroll_event_does_not_rearm() {
        let t0 = Instant::now();
        let mut strip = packages_strip();
        let (mut controller, mut display) = ready(&mut strip, t0);
        let t1 = t0 + Duration::from_secs(1);
        scroll_and_settle(&mut controller, &mut strip, &mut display, 0, t1);

        // The browser reports the teleport's scroll afterwards
        controller.on_scroll(&mut strip, t1 + Duration::from_millis(60));
        assert_eq!(controller.settle_deadline(), None);
        assert_eq!(controller.tick(&mut strip, &mut display, t1 + Duration::from_secs(1)), None);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn teleporting_holds_until_the_landing_is_reported() {
        let t0 = Instant::now();
        let mut strip = packages_strip();
        let (mut controller, mut display) = ready(&mut strip, t0);
        let t1 = t0 + Duration::from_secs(1);
        scroll_and_settle(&mut controller, &mut strip, &mut display, 5, t1);
        let landed_at = strip.scroll_left();

        // Timers alone never leave the teleport
        assert_eq!(controller.tick(&mut strip, &mut display, t1 + Duration::from_secs(5)), None);
        assert_eq!(controller.phase(), Phase::Teleporting { landed_at });
        assert!(!controller.is_scroll_suppressed());

        controller.on_scroll(&mut strip, t1 + Duration::from_secs(6));
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.settle_deadline(), None);
    }

    #[test]
    fn user_scroll_during_teleport_arms_the_timer() {
        let t0 = Instant::now();
        let mut strip = packages_strip();
        let (mut controller, mut display) = ready(&mut strip, t0);
        let t1 = t0 + Duration::from_secs(1);
        scroll_and_settle(&mut controller, &mut strip, &mut display, 0, t1);

        // The user moves on before the landing is reported
        strip.center_item(3);
        let t2 = t1 + Duration::from_millis(60);
        controller.on_scroll(&mut strip, t2);
        assert_eq!(controller.phase(), Phase::Settling);
        assert_eq!(controller.settle_deadline(), Some(t2 + Duration::from_millis(50)));
    }

    #[test]
    fn scroll_after_teleport_settles_normally() {
        let t0 = Instant::now();
        let mut strip = packages_strip();
        let (mut controller, mut display) = ready(&mut strip, t0);
        let t1 = t0 + Duration::from_secs(1);
        scroll_and_settle(&mut controller, &mut strip, &mut display, 0, t1);
        display.tabs.clear();

        let outcome = scroll_and_settle(&mut controller, &mut strip, &mut display, 2, t1 + Duration::from_secs(1));
        assert_eq!(outcome, Some(SettleOutcome::Settled { index: 2 }));
        assert_eq!(display.tabs, vec!["web"]);
    }

    #[test]
    fn continuous_scrolling_defers_settle() {
        let t0 = Instant::now();
        let mut strip = packages_strip();
        let (mut controller, mut display) = ready(&mut strip, t0);
        let t1 = t0 + Duration::from_secs(1);

        strip.center_item(0);
        controller.on_scroll(&mut strip, t1);
        controller.on_scroll(&mut strip, t1 + Duration::from_millis(30));
        assert_eq!(controller.tick(&mut strip, &mut display, t1 + Duration::from_millis(60)), None);
        assert_eq!(controller.phase(), Phase::Settling);

        // Momentum carried it on to an interior item before the pause
        strip.center_item(3);
        controller.on_scroll(&mut strip, t1 + Duration::from_millis(70));
        let outcome = controller.tick(&mut strip, &mut display, t1 + Duration::from_millis(120));
        assert_eq!(outcome, Some(SettleOutcome::Settled { index: 3 }));
    }

    #[test]
    fn settle_reads_geometry_after_resize() {
        let t0 = Instant::now();
        let mut strip = packages_strip();
        let (mut controller, mut display) = ready(&mut strip, t0);

        strip.inner.set_viewport_width(900.0);
        strip.center_item(3);
        controller.on_scroll(&mut strip, t0 + Duration::from_secs(1));
        let outcome = controller.tick(&mut strip, &mut display, t0 + Duration::from_secs(2));
        assert_eq!(outcome, Some(SettleOutcome::Settled { index: 3 }));
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    #[test]
    fn step_uses_centered_item_width_plus_gap() {
        let t0 = Instant::now();
        let mut strip = packages_strip();
        let (mut controller, _display) = ready(&mut strip, t0);

        strip.center_item(3);
        strip.calls.clear();
        let width = strip.item_geometry(3).width;
        let delta = controller.step(&mut strip, Direction::Next);

        assert_eq!(delta, width + 8.0);
        assert_eq!(strip.calls, vec![ScrollCall::By(width + 8.0, ScrollBehavior::Smooth)]);
    }

    #[test]
    fn step_prev_scrolls_backwards() {
        let t0 = Instant::now();
        let mut strip = packages_strip();
        let (mut controller, _display) = ready(&mut strip, t0);

        let width = strip.item_geometry(2).width;
        let delta = controller.step(&mut strip, Direction::Prev);
        assert_eq!(delta, -(width + 8.0));
    }

    #[test]
    fn step_on_hidden_strip_uses_fallback() {
        let t0 = Instant::now();
        let mut strip = RecordingStrip::new(FixedStrip::new(vec![0.0; 5], 8.0, 0.0));
        let (mut controller, _display) = ready(&mut strip, t0);

        let delta = controller.step(&mut strip, Direction::Next);
        assert_eq!(delta, 280.0);
    }

    #[test]
    fn arrow_keys_step_and_are_consumed() {
        let t0 = Instant::now();
        let mut strip = packages_strip();
        let (mut controller, _display) = ready(&mut strip, t0);

        assert!(controller.on_key(&mut strip, "ArrowRight"));
        assert!(controller.on_key(&mut strip, "ArrowLeft"));
        assert!(!controller.on_key(&mut strip, "Enter"));

        let deltas: Vec<f64> = strip
            .calls
            .iter()
            .map(|c| match c {
                ScrollCall::By(d, _) => *d,
                ScrollCall::To(..) => panic!("keys must scroll relatively"),
            })
            .collect();
        assert_eq!(deltas.len(), 2);
        assert!(deltas[0] > 0.0 && deltas[1] < 0.0);
    }

    #[test]
    fn next_then_settle_moves_selection_by_one() {
        let t0 = Instant::now();
        let mut strip = packages_strip();
        let (mut controller, mut display) = ready(&mut strip, t0);
        let t1 = t0 + Duration::from_secs(1);

        controller.step(&mut strip, Direction::Next);
        controller.on_scroll(&mut strip, t1);
        let outcome = controller.tick(&mut strip, &mut display, t1 + Duration::from_millis(50));
        assert_eq!(outcome, Some(SettleOutcome::Settled { index: 3 }));
        assert_eq!(display.tabs, vec!["seo"]);
    }

    // =========================================================================
    // Focus presentation
    // =========================================================================

    #[test]
    fn scroll_updates_focus_even_while_suppressed() {
        let t0 = Instant::now();
        let mut strip = packages_strip();
        let mut display = RecordingDisplay::default();
        let mut controller = CarouselController::init(&mut strip, &mut display, &config(), t0).unwrap();
        assert!(strip.inner.is_focused(2));

        strip.center_item(3);
        controller.on_scroll(&mut strip, t0);
        assert!(strip.inner.is_focused(3));
        assert!(!strip.inner.is_focused(2));
    }

    #[test]
    fn direction_from_key() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Prev));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Next));
        assert_eq!(Direction::from_key("ArrowUp"), None);
    }
}
