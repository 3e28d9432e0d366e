//! Instruction-derived constraints.
//!
//! `CompiledConstraints` is the structured form of an activity's
//! free-text instructions. It is ephemeral: recomputed every time the
//! activity is selected for relocation, never stored on the activity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TimeWindow;

/// Prefix of hard constraints that forbid a day.
pub const FORBIDDEN_DAY_PREFIX: &str = "forbidden_day:";

/// Preference key for a preferred clock window.
pub const PREFERRED_TIME: &str = "preferred_time";

/// Constraints compiled from instruction text.
///
/// Hard and soft constraints are opaque textual rules. The only
/// structured hard rule is `forbidden_day:<Day>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompiledConstraints {
    /// Rules that must hold.
    pub hard_constraints: Vec<String>,
    /// Rules that should hold.
    pub soft_constraints: Vec<String>,
    /// Named preferences (e.g., `preferred_time`).
    pub preferences: BTreeMap<String, TimeWindow>,
}

impl CompiledConstraints {
    /// Creates an empty constraint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a hard constraint.
    pub fn add_hard(&mut self, rule: impl Into<String>) {
        self.hard_constraints.push(rule.into());
    }

    /// Adds a soft constraint.
    pub fn add_soft(&mut self, rule: impl Into<String>) {
        self.soft_constraints.push(rule.into());
    }

    /// Sets a preference, overwriting any previous value for `key`.
    pub fn set_preference(&mut self, key: impl Into<String>, window: TimeWindow) {
        self.preferences.insert(key.into(), window);
    }

    /// The preferred clock window, if any.
    pub fn preferred_time(&self) -> Option<&TimeWindow> {
        self.preferences.get(PREFERRED_TIME)
    }

    /// Days excluded by `forbidden_day:<Day>` hard constraints.
    pub fn forbidden_days(&self) -> impl Iterator<Item = &str> {
        self.hard_constraints
            .iter()
            .filter_map(|c| c.strip_prefix(FORBIDDEN_DAY_PREFIX))
    }

    /// Whether `day` is excluded by a hard constraint (case-insensitive).
    pub fn forbids_day(&self, day: &str) -> bool {
        self.forbidden_days().any(|d| d.eq_ignore_ascii_case(day))
    }

    /// Whether nothing was compiled.
    pub fn is_empty(&self) -> bool {
        self.hard_constraints.is_empty()
            && self.soft_constraints.is_empty()
            && self.preferences.is_empty()
    }
}
