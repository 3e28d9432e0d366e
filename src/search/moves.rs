//! Relocation candidate generation.
//!
//! # Cost Model
//!
//! `cost = |shift_hours| + day_weight × day_index`
//!
//! Smaller time perturbations and earlier days in the schedule's day
//! order are cheaper. Candidates are not checked against other
//! activities; the search scores the resulting schedules instead.

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::models::{Activity, CompiledConstraints, Schedule, TimeWindow};

/// A candidate relocation of one activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    /// Relocated activity ID.
    pub activity_id: String,
    /// Target day.
    pub day: String,
    /// New start time.
    pub new_start: NaiveTime,
    /// New end time (start + original duration, wrapped at midnight).
    pub new_end: NaiveTime,
    /// Relocation cost (lower = preferred).
    pub cost: f64,
}

impl Move {
    /// The target clock window.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.new_start, self.new_end)
    }
}

/// Generates the cheapest relocation candidates for an activity.
///
/// # Example
/// ```
/// use chrono::NaiveTime;
/// use optisched::models::{Activity, CompiledConstraints, Schedule};
/// use optisched::search::MoveGenerator;
///
/// let gym = Activity::new(
///     "Gym",
///     2,
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
/// );
/// let schedule = Schedule::new().with_day("Monday", vec![gym.clone()]);
///
/// let moves = MoveGenerator::default().generate(&gym, &schedule, &CompiledConstraints::new());
/// assert_eq!(moves.len(), 4);
/// assert_eq!(moves[0].cost, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct MoveGenerator {
    hour_shifts: Vec<i64>,
    day_weight: f64,
    top_k: usize,
    enforce_forbidden_days: bool,
}

impl MoveGenerator {
    /// Creates a generator.
    pub fn new(hour_shifts: Vec<i64>, day_weight: f64, top_k: usize) -> Self {
        Self {
            hour_shifts,
            day_weight,
            top_k,
            enforce_forbidden_days: false,
        }
    }

    /// Drops candidate days excluded by `forbidden_day:` hard constraints.
    pub fn with_forbidden_days(mut self, enforce: bool) -> Self {
        self.enforce_forbidden_days = enforce;
        self
    }

    /// Generates up to `top_k` candidates, cheapest first.
    ///
    /// # Algorithm
    /// 1. For each day (index = position in day order) and each hour
    ///    shift, move the start by the shift (wrapping at midnight) and
    ///    keep the original duration.
    /// 2. Stable-sort by cost; equal costs keep generation order.
    /// 3. Keep the first `top_k`.
    ///
    /// `constraints` only filter days when forbidden-day enforcement is
    /// on; otherwise they are informational.
    pub fn generate(
        &self,
        activity: &Activity,
        schedule: &Schedule,
        constraints: &CompiledConstraints,
    ) -> Vec<Move> {
        let window = activity.window();
        let mut moves = Vec::with_capacity(schedule.day_count() * self.hour_shifts.len());

        for (day_index, day) in schedule.day_names().enumerate() {
            if self.enforce_forbidden_days && constraints.forbids_day(day) {
                continue;
            }
            for &shift in &self.hour_shifts {
                let target = window.shifted(TimeDelta::hours(shift));
                moves.push(Move {
                    activity_id: activity.id.clone(),
                    day: day.to_string(),
                    new_start: target.start,
                    new_end: target.end,
                    cost: shift.abs() as f64 + self.day_weight * day_index as f64,
                });
            }
        }

        moves.sort_by(|a, b| a.cost.total_cmp(&b.cost));
        moves.truncate(self.top_k);
        moves
    }
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new(vec![-2, -1, 1, 2], 0.5, 5)
    }
}
