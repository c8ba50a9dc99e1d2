//! Last-writer-wins settle timer.

use std::time::{Duration, Instant};

/// A restartable one-shot timer.
///
/// Every [`arm`](Debounce::arm) replaces the pending deadline, so the timer
/// only fires once `delay` has passed since the *latest* arm. This is a
/// debounce, not a throttle: a steady stream of arms never fires.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Cancel any pending deadline and start a fresh one from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the deadline if it has passed. Returns `true` exactly once per
    /// uninterrupted arm.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
