//! Weekly timetable conflict resolution.
//!
//! Given a weekly schedule and a new activity to insert, finds a
//! conflict-free rearrangement guided by activity priority and
//! constraints compiled from free-text instructions.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Activity`, `Schedule`, `TimeWindow`,
//!   `CompiledConstraints`
//! - **`compiler`**: Keyword rule table turning instructions into constraints
//! - **`conflict`**: Overlap detection and the relocation tie-breaker
//! - **`search`**: Move generation, scoring, canonical hashing and the
//!   best-first `ConflictResolver`
//! - **`validation`**: Input integrity checks (durations, duplicate IDs)
//!
//! # Scope
//!
//! File import/export, rendering and persistence belong to the caller.
//! The resolver takes a schedule and returns a schedule.
//!
//! # Example
//!
//! ```
//! use optisched::models::{parse_clock, Activity, Schedule};
//! use optisched::search::{ConflictResolver, ResolveRequest};
//!
//! let base = Schedule::new().with_day(
//!     "Monday",
//!     vec![Activity::new("Gym", 2, parse_clock("09:00")?, parse_clock("10:00")?)],
//! );
//! let study = Activity::new("Study", 4, parse_clock("09:00")?, parse_clock("10:00")?)
//!     .with_instructions("I must study in the morning");
//!
//! let request = ResolveRequest::new(base, study).with_target_day("Monday");
//! let resolution = ConflictResolver::new().resolve_checked(&request)?;
//!
//! let state = resolution.outcome.state();
//! assert!(state.is_conflict_free());
//! assert_eq!(state.score, 100.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # References
//!
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//!   Ch. 3.5 (Best-first search)
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod compiler;
pub mod conflict;
pub mod error;
pub mod models;
pub mod search;
pub mod validation;

pub use error::{ResolveError, Result};
