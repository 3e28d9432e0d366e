//! Activity model.
//!
//! An activity is the smallest schedulable unit in a weekly timetable:
//! a named, prioritized block of clock time on one day, carrying the
//! free-text instructions its owner attached to it.
//!
//! # Priority Convention
//! Larger `priority` = more important. When two activities collide,
//! the less important one is relocated.

use chrono::{NaiveTime, ParseError, TimeDelta};
use serde::{Deserialize, Serialize};

use super::TimeWindow;

/// A time-boxed activity.
///
/// Activities are immutable values: relocating one produces a new
/// `Activity` with the same id, priority and instructions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Activity {
    /// Activity identifier, unique within a schedule.
    pub id: String,
    /// Importance (higher = more important).
    pub priority: i32,
    /// Start time (inclusive).
    pub start_time: NaiveTime,
    /// End time (exclusive). Expected to be after `start_time`.
    pub end_time: NaiveTime,
    /// Free-text instructions, compiled into constraints on demand.
    pub instructions: String,
}

impl Activity {
    /// Creates a new activity with empty instructions.
    pub fn new(
        id: impl Into<String>,
        priority: i32,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            id: id.into(),
            priority,
            start_time,
            end_time,
            instructions: String::new(),
        }
    }

    /// Sets the instruction text.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// The occupied clock window.
    #[inline]
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }

    /// Length of the activity.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.window().duration()
    }

    /// Whether two activities overlap in time (day is not considered).
    pub fn overlaps(&self, other: &Activity) -> bool {
        self.window().overlaps(&other.window())
    }

    /// Returns a copy placed at `window`, keeping identity and instructions.
    pub fn relocated(&self, window: TimeWindow) -> Self {
        Self {
            start_time: window.start,
            end_time: window.end,
            ..self.clone()
        }
    }
}

/// Parses a clock time in `HH:MM` form.
///
/// # Example
/// ```
/// use optisched::models::parse_clock;
///
/// let t = parse_clock("13:30").unwrap();
/// assert_eq!(t.to_string(), "13:30:00");
/// assert!(parse_clock("25:00").is_err());
/// ```
pub fn parse_clock(text: &str) -> Result<NaiveTime, ParseError> {
    NaiveTime::parse_from_str(text.trim(), "%H:%M")
}
