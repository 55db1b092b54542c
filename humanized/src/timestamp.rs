//! Point-in-time types the formatter accepts
//!
//! The formatter only needs to order two values and measure the gap between
//! them. Wall-clock, monotonic and chrono timestamps all qualify.

use std::time::{Duration, Instant, SystemTime};

use chrono::{DateTime, TimeZone};

/// A totally ordered instant with nanosecond resolution
pub trait Timestamp: Ord {
    /// Time elapsed from `earlier` to `self`
    ///
    /// Returns `Duration::ZERO` if `earlier` is actually later.
    fn span_since(&self, earlier: &Self) -> Duration;
}

impl Timestamp for SystemTime {
    fn span_since(&self, earlier: &Self) -> Duration {
        self.duration_since(*earlier).unwrap_or_default()
    }
}

impl Timestamp for Instant {
    fn span_since(&self, earlier: &Self) -> Duration {
        self.saturating_duration_since(*earlier)
    }
}

impl<Tz: TimeZone> Timestamp for DateTime<Tz> {
    fn span_since(&self, earlier: &Self) -> Duration {
        self.clone()
            .signed_duration_since(earlier.clone())
            .to_std()
            .unwrap_or_default()
    }
}
