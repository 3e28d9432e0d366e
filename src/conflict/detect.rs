//! Pairwise overlap detection.

use crate::models::{Activity, Schedule};

/// Two overlapping activities on one day.
///
/// `first` precedes `second` in the day's placement order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conflict<'a> {
    /// Day on which both activities are placed.
    pub day: &'a str,
    /// Earlier activity in placement order.
    pub first: &'a Activity,
    /// Later activity in placement order.
    pub second: &'a Activity,
}

/// Finds every conflicting pair.
///
/// Ordered by day order, then by pair index `(i, j)` with `i < j`.
pub fn find_conflicts(schedule: &Schedule) -> Vec<Conflict<'_>> {
    let mut conflicts = Vec::new();
    for plan in schedule.days() {
        let acts = plan.activities();
        for i in 0..acts.len() {
            for j in (i + 1)..acts.len() {
                if acts[i].overlaps(&acts[j]) {
                    conflicts.push(Conflict {
                        day: plan.name(),
                        first: &acts[i],
                        second: &acts[j],
                    });
                }
            }
        }
    }
    conflicts
}

/// The first conflicting pair in `find_conflicts` order, without
/// scanning the rest of the schedule.
pub fn first_conflict(schedule: &Schedule) -> Option<Conflict<'_>> {
    schedule.days().iter().find_map(|plan| {
        let acts = plan.activities();
        (0..acts.len()).find_map(move |i| {
            acts[i + 1..]
                .iter()
                .find(|b| acts[i].overlaps(b))
                .map(|b| Conflict {
                    day: plan.name(),
                    first: &acts[i],
                    second: b,
                })
        })
    })
}

/// Number of conflicting pairs.
pub fn conflict_count(schedule: &Schedule) -> usize {
    schedule
        .days()
        .iter()
        .map(|plan| {
            let acts = plan.activities();
            (0..acts.len())
                .map(|i| {
                    acts[i + 1..]
                        .iter()
                        .filter(|b| acts[i].overlaps(b))
                        .count()
                })
                .sum::<usize>()
        })
        .sum()
}

/// Whether any two activities on the same day overlap.
pub fn has_conflicts(schedule: &Schedule) -> bool {
    conflict_count(schedule) > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn act(id: &str, sh: u32, sm: u32, eh: u32, em: u32) -> Activity {
        Activity::new(
            id,
            1,
            NaiveTime::from_hms_opt(sh, sm, 0).unwrap(),
            NaiveTime::from_hms_opt(eh, em, 0).unwrap(),
        )
    }

    #[test]
    fn test_no_conflicts_touching() {
        let s = Schedule::new().with_day(
            "Monday",
            vec![act("A", 9, 0, 10, 0), act("B", 10, 0, 11, 0)],
        );
        assert!(find_conflicts(&s).is_empty());
        assert_eq!(conflict_count(&s), 0);
        assert!(!has_conflicts(&s));
    }

    #[test]
    fn test_same_time_different_days() {
        let s = Schedule::new()
            .with_day("Monday", vec![act("A", 9, 0, 10, 0)])
            .with_day("Tuesday", vec![act("B", 9, 0, 10, 0)]);
        assert!(!has_conflicts(&s));
    }

    #[test]
    fn test_conflict_order() {
        let s = Schedule::new()
            .with_day(
                "Tuesday",
                vec![
                    act("A", 9, 0, 11, 0),
                    act("B", 10, 0, 12, 0),
                    act("C", 10, 30, 10, 45),
                ],
            )
            .with_day("Monday", vec![act("X", 8, 0, 9, 0), act("Y", 8, 30, 9, 30)]);

        let conflicts = find_conflicts(&s);
        let ids: Vec<(&str, &str, &str)> = conflicts
            .iter()
            .map(|c| (c.day, c.first.id.as_str(), c.second.id.as_str()))
            .collect();
        assert_eq!(
            ids,
            vec![
                ("Tuesday", "A", "B"),
                ("Tuesday", "A", "C"),
                ("Tuesday", "B", "C"),
                ("Monday", "X", "Y"),
            ]
        );
        assert_eq!(conflict_count(&s), 4);
        assert_eq!(first_conflict(&s), conflicts.first().copied());
    }

    #[test]
    fn test_empty_schedule() {
        assert!(find_conflicts(&Schedule::new()).is_empty());
        assert_eq!(conflict_count(&Schedule::new()), 0);
        assert!(first_conflict(&Schedule::new()).is_none());
    }
}
