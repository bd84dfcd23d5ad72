//! Frame throttle for high-frequency pointer updates.

use std::time::{Duration, Instant};

/// Lets an update through at most once per `interval`.
///
/// The first update after construction or `reset` always passes.
#[derive(Clone, Copy, Debug)]
pub struct FrameThrottle {
    interval: Duration,
    last: Option<Instant>,
}

impl FrameThrottle {
    pub fn new(interval: Duration) -> Self {
        Self { interval, last: None }
    }

    /// Returns `true` and records `now` if enough time has passed since the
    /// last update that went through.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
