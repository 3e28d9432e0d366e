//! Conflict detection and tie-breaking.
//!
//! A conflict is a pair of activities on the same day whose half-open
//! windows overlap. Touching boundaries (`a.end == b.start`) are not
//! conflicts.
//!
//! # Complexity
//! Detection is O(n²) per day, which is fine for timetable-sized days.

mod detect;
mod tie_break;

pub use detect::{conflict_count, find_conflicts, first_conflict, has_conflicts, Conflict};
pub use tie_break::select_to_move;
