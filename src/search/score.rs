//! Schedule fitness.
//!
//! | Function | Formula | Use |
//! |----------|---------|-----|
//! | `evaluate_partial` | −conflicts | frontier priority (higher = better) |
//! | `evaluate_full` | 100 − 10 × conflicts | final score of an accepted state |

use crate::conflict::conflict_count;
use crate::models::Schedule;

/// Score of a fully conflict-free schedule.
pub const PERFECT_SCORE: f64 = 100.0;

/// Penalty per conflicting pair in the full score.
pub const CONFLICT_PENALTY: f64 = 10.0;

/// Partial fitness: the negated number of conflicting pairs.
pub fn evaluate_partial(schedule: &Schedule) -> f64 {
    -(conflict_count(schedule) as f64)
}

/// Full fitness.
///
/// Always `PERFECT_SCORE` for a conflict-free schedule; the general
/// formula also grades near-conflict-free schedules.
pub fn evaluate_full(schedule: &Schedule) -> f64 {
    PERFECT_SCORE - CONFLICT_PENALTY * conflict_count(schedule) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;
    use chrono::NaiveTime;

    fn act(id: &str, sh: u32, eh: u32) -> Activity {
        Activity::new(
            id,
            1,
            NaiveTime::from_hms_opt(sh, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(eh, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_scores_conflict_free() {
        let s = Schedule::new().with_day("Monday", vec![act("A", 9, 10), act("B", 10, 11)]);
        assert_eq!(evaluate_partial(&s), 0.0);
        assert_eq!(evaluate_full(&s), 100.0);
    }

    #[test]
    fn test_scores_with_conflicts() {
        let s = Schedule::new().with_day(
            "Monday",
            vec![act("A", 9, 11), act("B", 10, 12), act("C", 10, 11)],
        );
        // A-B, A-C, B-C
        assert_eq!(evaluate_partial(&s), -3.0);
        assert_eq!(evaluate_full(&s), 70.0);
    }
}
