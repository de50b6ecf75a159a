//! Trailing-edge debounce countdown for settle detection.
//!
//! The engine is frame-driven: each scroll event re-arms the countdown and
//! [`DebounceTimer::tick`] advances it by the frame delta. There is no
//! leading-edge fire; re-arming always restarts the full quiet period, and a
//! cancelled countdown has no effect on later arms.

use std::time::Duration;

/// A re-armable countdown that fires once per arm, on the tick it elapses.
#[derive(Debug, Clone)]
pub struct DebounceTimer {
    period: Duration,
    remaining: Option<Duration>,
}

impl DebounceTimer {
    /// Create a disarmed timer with the given quiet period.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            remaining: None,
        }
    }

    /// The configured quiet period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Change the quiet period. Takes effect on the next arm; a running
    /// countdown keeps its original deadline.
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
    }

    /// Start (or restart) the countdown at the full quiet period.
    pub fn arm(&mut self) {
        self.remaining = Some(self.period);
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    /// Whether a countdown is pending.
    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance the countdown by `dt`.
    ///
    /// Returns `true` exactly once per arm, on the call that consumes the
    /// remaining time. Disarmed timers return `false`.
    pub fn tick(&mut self, dt: Duration) -> bool {
        match self.remaining {
            Some(remaining) if remaining <= dt => {
                self.remaining = None;
                true
            }
            Some(remaining) => {
                self.remaining = Some(remaining - dt);
                false
            }
            None => false,
        }
    }
}
