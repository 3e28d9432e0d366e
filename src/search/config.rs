//! Search configuration.

use serde::{Deserialize, Serialize};

use super::MoveGenerator;

/// Default day that receives the inserted activity.
pub const DEFAULT_TARGET_DAY: &str = "Monday";

/// Search parameters, owned by the caller and passed per invocation.
///
/// | Field | Default |
/// |-------|---------|
/// | `max_depth` | 6 |
/// | `top_k` | 5 |
/// | `hour_shifts` | -2, -1, 1, 2 |
/// | `day_weight` | 0.5 |
/// | `enforce_forbidden_days` | true |
/// | `max_expansions` | unbounded |
///
/// Without an expansion budget, work is bounded by `top_k^max_depth`
/// node expansions before deduplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum relocations along one branch.
    pub max_depth: usize,
    /// Relocation candidates kept per expansion.
    pub top_k: usize,
    /// Candidate start-time shifts (hours).
    pub hour_shifts: Vec<i64>,
    /// Cost per position in the day order.
    pub day_weight: f64,
    /// Whether `forbidden_day:` hard constraints filter candidate days.
    pub enforce_forbidden_days: bool,
    /// Maximum expanded nodes before giving up.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 6,
            top_k: 5,
            hour_shifts: vec![-2, -1, 1, 2],
            day_weight: 0.5,
            enforce_forbidden_days: true,
            max_expansions: None,
        }
    }
}

impl SearchConfig {
    /// Sets the depth bound.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the number of candidates per expansion.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Sets the candidate hour shifts.
    pub fn with_hour_shifts(mut self, hour_shifts: Vec<i64>) -> Self {
        self.hour_shifts = hour_shifts;
        self
    }

    /// Sets the day-distance cost weight.
    pub fn with_day_weight(mut self, day_weight: f64) -> Self {
        self.day_weight = day_weight;
        self
    }

    /// Enables or disables forbidden-day filtering.
    pub fn with_forbidden_days(mut self, enforce: bool) -> Self {
        self.enforce_forbidden_days = enforce;
        self
    }

    /// Caps the number of expanded nodes.
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Builds the move generator described by this configuration.
    pub fn move_generator(&self) -> MoveGenerator {
        MoveGenerator::new(self.hour_shifts.clone(), self.day_weight, self.top_k)
            .with_forbidden_days(self.enforce_forbidden_days)
    }

    /// Checks parameters that would make every search degenerate.
    pub fn validate(&self) -> Result<(), String> {
        if self.top_k == 0 {
            return Err("top_k must be at least 1".into());
        }
        if self.hour_shifts.is_empty() {
            return Err("hour_shifts must not be empty".into());
        }
        if self.hour_shifts.iter().any(|s| s.abs() >= 24) {
            return Err("hour_shifts must lie within (-24, 24)".into());
        }
        if !self.day_weight.is_finite() || self.day_weight < 0.0 {
            return Err(format!("day_weight must be finite and >= 0, got {}", self.day_weight));
        }
        Ok(())
    }
}
