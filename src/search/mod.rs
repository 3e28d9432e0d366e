//! Best-first relocation search.
//!
//! Orchestrates conflict detection, tie-breaking, instruction compiling
//! and move generation to turn a schedule with a newly inserted
//! activity into a conflict-free one.
//!
//! # Components
//!
//! - **`MoveGenerator`**: ranked relocation candidates for one activity
//! - **`evaluate_partial` / `evaluate_full`**: schedule fitness
//! - **`canonical_hash`**: order-independent fingerprint for deduplication
//! - **`ConflictResolver`**: the search loop
//!
//! The search is a bounded heuristic: it returns the first conflict-free
//! schedule it reaches, not a certified optimum.

mod config;
mod engine;
mod hash;
mod moves;
mod score;

pub use config::{SearchConfig, DEFAULT_TARGET_DAY};
pub use engine::{
    ConflictResolver, ExhaustionReason, Resolution, ResolveOutcome, ResolveRequest,
    ScheduleState, SearchStats,
};
pub use hash::canonical_hash;
pub use moves::{Move, MoveGenerator};
pub use score::{evaluate_full, evaluate_partial, CONFLICT_PENALTY, PERFECT_SCORE};
