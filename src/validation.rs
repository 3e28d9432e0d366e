//! Input validation for conflict resolution.
//!
//! The search itself accepts any input; degenerate activities simply
//! produce degenerate moves. These checks let callers reject such input
//! up front. Detects:
//! - Empty activity IDs and day names
//! - Zero or negative durations (`start >= end`)
//! - Duplicate activity IDs within a day
//! - The same activity ID on several days (relocation removes an ID
//!   from every day, so such activities would be merged)

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::models::{Activity, Schedule};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An activity has an empty ID.
    EmptyId,
    /// A day has an empty name.
    EmptyDayName,
    /// An activity does not end after it starts.
    NonPositiveDuration,
    /// Two activities on one day share an ID.
    DuplicateId,
    /// An activity ID appears on more than one day.
    IdOnMultipleDays,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a single activity.
pub fn validate_activity(activity: &Activity) -> ValidationResult {
    let mut errors = Vec::new();
    check_activity(activity, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_activity(activity: &Activity, errors: &mut Vec<ValidationError>) {
    if activity.id.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyId,
            "Activity has an empty ID",
        ));
    }
    if activity.start_time >= activity.end_time {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveDuration,
            format!(
                "Activity '{}' does not end after it starts ({}-{})",
                activity.id, activity.start_time, activity.end_time
            ),
        ));
    }
}

/// Validates a schedule.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_schedule(schedule: &Schedule) -> ValidationResult {
    let mut errors = Vec::new();
    let mut first_day: HashMap<&str, &str> = HashMap::new();

    for plan in schedule.days() {
        if plan.name().trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyDayName,
                "Schedule contains a day with an empty name",
            ));
        }

        let mut seen_today: HashSet<&str> = HashSet::new();
        let mut reported: HashSet<&str> = HashSet::new();
        for act in plan.activities() {
            check_activity(act, &mut errors);

            let id = act.id.as_str();
            if !seen_today.insert(id) {
                if reported.insert(id) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::DuplicateId,
                        format!("Duplicate activity ID '{}' on {}", id, plan.name()),
                    ));
                }
                continue;
            }

            if let Some(day) = first_day.get(id).copied() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::IdOnMultipleDays,
                    format!(
                        "Activity ID '{}' appears on both {} and {}",
                        id,
                        day,
                        plan.name()
                    ),
                ));
            } else {
                first_day.insert(id, plan.name());
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
