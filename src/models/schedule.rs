//! Weekly schedule model.
//!
//! A schedule maps day names to the activities placed on that day.
//! Day order is insertion order and is significant: it drives conflict
//! reporting order and the day-distance term of relocation cost.
//!
//! # Storage
//! Each day's activities live behind an `Arc`. Cloning a schedule only
//! clones pointers; mutating a day (`Arc::make_mut`) copies that day
//! alone. Search nodes therefore share every day they did not touch.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Activity;

/// A weekly schedule (day → activities).
///
/// Non-goal schedules may contain overlapping activities; a goal
/// schedule has no two overlapping activities on the same day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    days: Vec<DayPlan>,
}

/// The activities of one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    name: String,
    activities: Arc<Vec<Activity>>,
}

impl DayPlan {
    fn new(name: impl Into<String>, activities: Vec<Activity>) -> Self {
        Self {
            name: name.into(),
            activities: Arc::new(activities),
        }
    }

    /// Day name (e.g., "Monday").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Activities in placement order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Number of activities on this day.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the day has no activities.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Whether both plans point at the same activity storage.
    pub fn shares_storage(&self, other: &DayPlan) -> bool {
        Arc::ptr_eq(&self.activities, &other.activities)
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: appends a day with its activities.
    ///
    /// If the day already exists, the activities are appended to it.
    pub fn with_day(mut self, day: impl Into<String>, activities: Vec<Activity>) -> Self {
        let day = day.into();
        match self.day_index(&day) {
            Some(idx) => Arc::make_mut(&mut self.days[idx].activities).extend(activities),
            None => self.days.push(DayPlan::new(day, activities)),
        }
        self
    }

    /// Adds an activity to a day, creating the day at the end of the
    /// day order if it does not exist yet.
    pub fn add_activity(&mut self, day: &str, activity: Activity) {
        let idx = self.ensure_day(day);
        Arc::make_mut(&mut self.days[idx].activities).push(activity);
    }

    /// Returns the index of `day`, appending an empty day if missing.
    pub fn ensure_day(&mut self, day: &str) -> usize {
        match self.day_index(day) {
            Some(idx) => idx,
            None => {
                self.days.push(DayPlan::new(day, Vec::new()));
                self.days.len() - 1
            }
        }
    }

    /// Removes every activity with the given id from every day.
    ///
    /// Only days that actually contain the id are copied. Empty days are
    /// kept in place. Returns the number of removed activities.
    pub fn remove_activity(&mut self, activity_id: &str) -> usize {
        let mut removed = 0;
        for plan in &mut self.days {
            if plan.activities.iter().any(|a| a.id == activity_id) {
                let acts = Arc::make_mut(&mut plan.activities);
                let before = acts.len();
                acts.retain(|a| a.id != activity_id);
                removed += before - acts.len();
            }
        }
        removed
    }

    /// Position of a day in the day order.
    pub fn day_index(&self, day: &str) -> Option<usize> {
        self.days.iter().position(|p| p.name == day)
    }

    /// Activities on a day, or `None` if the day is unknown.
    pub fn day(&self, day: &str) -> Option<&[Activity]> {
        self.days
            .iter()
            .find(|p| p.name == day)
            .map(|p| p.activities())
    }

    /// Day plans in day order.
    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    /// Day names in day order.
    pub fn day_names(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|p| p.name())
    }

    /// All (day, activity) placements in day order.
    pub fn placements(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.days
            .iter()
            .flat_map(|p| p.activities.iter().map(move |a| (p.name(), a)))
    }

    /// Finds the first placement of an activity.
    pub fn find_activity(&self, activity_id: &str) -> Option<(&str, &Activity)> {
        self.placements().find(|(_, a)| a.id == activity_id)
    }

    /// Number of days.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Total number of placed activities.
    pub fn activity_count(&self) -> usize {
        self.days.iter().map(|p| p.len()).sum()
    }

    /// Whether no activity is placed.
    pub fn is_empty(&self) -> bool {
        self.activity_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn act(id: &str, sh: u32, eh: u32) -> Activity {
        Activity::new(
            id,
            1,
            NaiveTime::from_hms_opt(sh, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(eh, 0, 0).unwrap(),
        )
    }

    fn sample_schedule() -> Schedule {
        Schedule::new()
            .with_day("Monday", vec![act("Math", 9, 10), act("Gym", 11, 12)])
            .with_day("Tuesday", vec![act("Art", 9, 10)])
    }

    #[test]
    fn test_schedule_counts() {
        let s = sample_schedule();
        assert_eq!(s.day_count(), 2);
        assert_eq!(s.activity_count(), 3);
        assert!(!s.is_empty());
        assert!(Schedule::new().is_empty());
    }

    #[test]
    fn test_day_order_is_insertion_order() {
        let mut s = Schedule::new().with_day("Wednesday", vec![]);
        s.add_activity("Monday", act("Math", 9, 10));
        s.add_activity("Wednesday", act("Art", 9, 10));

        let names: Vec<&str> = s.day_names().collect();
        assert_eq!(names, vec!["Wednesday", "Monday"]);
        assert_eq!(s.day("Wednesday").unwrap().len(), 1);
    }

    #[test]
    fn test_with_day_merges_existing() {
        let s = sample_schedule().with_day("Monday", vec![act("Lab", 13, 14)]);
        assert_eq!(s.day_count(), 2);
        assert_eq!(s.day("Monday").unwrap().len(), 3);
    }

    #[test]
    fn test_remove_activity_keeps_empty_day() {
        let mut s = sample_schedule();
        assert_eq!(s.remove_activity("Art"), 1);
        assert_eq!(s.day("Tuesday").unwrap().len(), 0);
        assert_eq!(s.day_count(), 2);
        assert_eq!(s.remove_activity("Nope"), 0);
    }

    #[test]
    fn test_clone_shares_untouched_days() {
        let original = sample_schedule();
        let mut copy = original.clone();
        copy.remove_activity("Art");

        // Monday untouched: still shared. Tuesday copied on write.
        assert!(copy.days()[0].shares_storage(&original.days()[0]));
        assert!(!copy.days()[1].shares_storage(&original.days()[1]));
        assert_eq!(original.day("Tuesday").unwrap().len(), 1);
    }

    #[test]
    fn test_find_activity() {
        let s = sample_schedule();
        let (day, a) = s.find_activity("Gym").unwrap();
        assert_eq!(day, "Monday");
        assert_eq!(a.id, "Gym");
        assert!(s.find_activity("Swim").is_none());
    }

    #[test]
    fn test_schedule_serde() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"09:00:00\""));
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
