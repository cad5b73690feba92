//! Schedule of a run, relative to its start.
//!
//! With the default 600 ms duration:
//!
//! ```text
//!   0 ms ──┬── ticker: +2 every 16 ms, stops at 40
//! 240 ms ──┼── midpoint: progress 50, navigation fires
//! 300 ms ──┼── exit: phase exiting, progress 70
//! 600 ms ──┼── finish: progress 100
//! 700 ms ──┴── settle: idle, on_complete, completion resolves
//! ```

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
    /// Default run length; `TransitionOptions::duration` overrides it per run
    pub duration: Duration,
    /// Period of the visual progress ticker
    pub tick_interval: Duration,
    /// Progress added per tick
    pub tick_step: u8,
    /// Fraction of the duration at which navigation fires
    pub midpoint_ratio: f64,
    /// Fraction of the duration at which the overlay exits
    pub exit_ratio: f64,
    /// Pause between reaching 100 and returning to idle
    pub settle_delay: Duration,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(600),
            tick_interval: Duration::from_millis(16),
            tick_step: 2,
            midpoint_ratio: 0.4,
            exit_ratio: 0.5,
            settle_delay: Duration::from_millis(100),
        }
    }
}

/// Absolute offsets of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marks {
    pub midpoint: Duration,
    pub exit: Duration,
    pub finish: Duration,
    pub settle: Duration,
}

impl TransitionTiming {
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Offsets for a run of `duration`.
    pub fn marks(&self, duration: Duration) -> Marks {
        Marks {
            midpoint: scale(duration, self.midpoint_ratio),
            exit: scale(duration, self.exit_ratio),
            finish: duration,
            settle: duration + self.settle_delay,
        }
    }
}

/// `duration * ratio`, rounded to the nearest nanosecond.
fn scale(duration: Duration, ratio: f64) -> Duration {
    let nanos = (duration.as_nanos() as f64 * ratio.clamp(0.0, 1.0)).round();
    Duration::from_nanos(nanos as u64)
}
