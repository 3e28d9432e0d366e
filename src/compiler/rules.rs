//! Built-in instruction rules.
//!
//! # Default Table (evaluation order)
//!
//! | Rule | Keywords | Effect |
//! |------|----------|--------|
//! | `HardKeyword` | must, cannot | raw text → hard constraint |
//! | `SoftKeyword` | prefer, ideally | raw text → soft constraint |
//! | `PreferredWindow` | morning | `preferred_time` = 08:00–12:00 |
//! | `PreferredWindow` | afternoon | `preferred_time` = 12:00–17:00 |
//! | `ForbiddenDay` | avoid friday | `forbidden_day:Friday` |

use chrono::NaiveTime;

use super::InstructionRule;
use crate::models::{CompiledConstraints, TimeWindow, FORBIDDEN_DAY_PREFIX, PREFERRED_TIME};

const fn at_hour(hour: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, 0, 0) {
        Some(time) => time,
        None => panic!("hour out of range"),
    }
}

const MORNING: TimeWindow = TimeWindow {
    start: at_hour(8),
    end: at_hour(12),
};

const AFTERNOON: TimeWindow = TimeWindow {
    start: at_hour(12),
    end: at_hour(17),
};

fn contains_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lowered.contains(k))
}

/// Records the raw instruction as a hard constraint.
#[derive(Debug, Clone)]
pub struct HardKeyword {
    keywords: Vec<&'static str>,
}

impl HardKeyword {
    /// Creates a rule firing on any of `keywords` (lower-case).
    pub fn new(keywords: &[&'static str]) -> Self {
        Self {
            keywords: keywords.to_vec(),
        }
    }
}

impl Default for HardKeyword {
    fn default() -> Self {
        Self::new(&["must", "cannot"])
    }
}

impl InstructionRule for HardKeyword {
    fn name(&self) -> &'static str {
        "HARD_KEYWORD"
    }

    fn matches(&self, lowered: &str) -> bool {
        contains_any(lowered, &self.keywords)
    }

    fn apply(&self, raw: &str, constraints: &mut CompiledConstraints) {
        constraints.add_hard(raw);
    }
}

/// Records the raw instruction as a soft constraint.
#[derive(Debug, Clone)]
pub struct SoftKeyword {
    keywords: Vec<&'static str>,
}

impl SoftKeyword {
    /// Creates a rule firing on any of `keywords` (lower-case).
    pub fn new(keywords: &[&'static str]) -> Self {
        Self {
            keywords: keywords.to_vec(),
        }
    }
}

impl Default for SoftKeyword {
    fn default() -> Self {
        Self::new(&["prefer", "ideally"])
    }
}

impl InstructionRule for SoftKeyword {
    fn name(&self) -> &'static str {
        "SOFT_KEYWORD"
    }

    fn matches(&self, lowered: &str) -> bool {
        contains_any(lowered, &self.keywords)
    }

    fn apply(&self, raw: &str, constraints: &mut CompiledConstraints) {
        constraints.add_soft(raw);
    }
}

/// Sets the `preferred_time` window when a keyword appears.
#[derive(Debug, Clone)]
pub struct PreferredWindow {
    keyword: &'static str,
    window: TimeWindow,
}

impl PreferredWindow {
    /// Creates a rule mapping `keyword` to `window`.
    pub fn new(keyword: &'static str, window: TimeWindow) -> Self {
        Self { keyword, window }
    }

    /// "morning" → 08:00–12:00.
    pub fn morning() -> Self {
        Self::new("morning", MORNING)
    }

    /// "afternoon" → 12:00–17:00.
    pub fn afternoon() -> Self {
        Self::new("afternoon", AFTERNOON)
    }
}

impl InstructionRule for PreferredWindow {
    fn name(&self) -> &'static str {
        "PREFERRED_WINDOW"
    }

    fn matches(&self, lowered: &str) -> bool {
        lowered.contains(self.keyword)
    }

    fn apply(&self, _raw: &str, constraints: &mut CompiledConstraints) {
        constraints.set_preference(PREFERRED_TIME, self.window);
    }
}

/// Adds `forbidden_day:<Day>` when "avoid <day>" appears.
#[derive(Debug, Clone)]
pub struct ForbiddenDay {
    day: String,
    phrase: String,
}

impl ForbiddenDay {
    /// Creates a rule for `day` (e.g., "Friday").
    pub fn new(day: impl Into<String>) -> Self {
        let day = day.into();
        let phrase = format!("avoid {}", day.to_lowercase());
        Self { day, phrase }
    }
}

impl InstructionRule for ForbiddenDay {
    fn name(&self) -> &'static str {
        "FORBIDDEN_DAY"
    }

    fn matches(&self, lowered: &str) -> bool {
        lowered.contains(&self.phrase)
    }

    fn apply(&self, _raw: &str, constraints: &mut CompiledConstraints) {
        constraints.add_hard(format!("{FORBIDDEN_DAY_PREFIX}{}", self.day));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_keyword() {
        let rule = HardKeyword::default();
        assert!(rule.matches("you must"));
        assert!(rule.matches("cannot move"));
        assert!(!rule.matches("flexible"));

        let mut c = CompiledConstraints::new();
        rule.apply("You MUST", &mut c);
        assert_eq!(c.hard_constraints, vec!["You MUST"]);
    }

    #[test]
    fn test_soft_keyword() {
        let rule = SoftKeyword::default();
        assert!(rule.matches("i prefer this"));
        assert!(rule.matches("ideally later"));
        assert!(!rule.matches("must"));
    }

    #[test]
    fn test_preferred_window() {
        let rule = PreferredWindow::morning();
        assert_eq!(rule.name(), "PREFERRED_WINDOW");
        let mut c = CompiledConstraints::new();
        rule.apply("morning", &mut c);
        assert_eq!(c.preferred_time().copied(), TimeWindow::hours(8, 12));

        let mut c = CompiledConstraints::new();
        PreferredWindow::afternoon().apply("afternoon", &mut c);
        assert_eq!(c.preferred_time().copied(), TimeWindow::hours(12, 17));
    }

    #[test]
    fn test_forbidden_day_custom() {
        let rule = ForbiddenDay::new("Sunday");
        assert!(rule.matches("please avoid sunday"));
        assert!(!rule.matches("avoid friday"));

        let mut c = CompiledConstraints::new();
        rule.apply("", &mut c);
        assert!(c.forbids_day("Sunday"));
    }
}
