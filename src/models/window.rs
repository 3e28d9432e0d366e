//! Clock-time windows.
//!
//! All times are wall-clock times within a single day (`NaiveTime`).
//! A window never spans midnight; callers that wrap times around
//! midnight get whatever the half-open comparison yields.

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// A time interval [start, end) within one day.
///
/// Half-open interval: includes start, excludes end. Two windows that
/// merely touch (`a.end == b.start`) do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: NaiveTime,
    /// Interval end (exclusive).
    pub end: NaiveTime,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Creates a window from whole hours, e.g. `TimeWindow::hours(8, 12)`.
    ///
    /// Returns `None` for hours outside `0..24`.
    pub fn hours(start_hour: u32, end_hour: u32) -> Option<Self> {
        Some(Self::new(
            NaiveTime::from_hms_opt(start_hour, 0, 0)?,
            NaiveTime::from_hms_opt(end_hour, 0, 0)?,
        ))
    }

    /// Length of the window. Negative when `end < start`.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.end.signed_duration_since(self.start)
    }

    /// Whether a time falls within this window.
    #[inline]
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }

    /// Shifts the window by `delta`, wrapping around midnight, and keeps
    /// its original length.
    pub fn shifted(&self, delta: TimeDelta) -> Self {
        let (start, _) = self.start.overflowing_add_signed(delta);
        let (end, _) = start.overflowing_add_signed(self.duration());
        Self { start, end }
    }
}
