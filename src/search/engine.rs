//! Best-first conflict resolution search.
//!
//! # Algorithm
//!
//! 1. Initial state: the base schedule with the new activity appended
//!    to the target day; `depth = 0`, no moved activities.
//! 2. Pop the frontier node with the best partial score (fewest
//!    conflicts); ties go to the node pushed first.
//! 3. Skip nodes whose canonical hash was already expanded.
//! 4. Zero conflicts → resolved, scored with `evaluate_full`.
//! 5. `depth >= max_depth` → prune.
//! 6. Otherwise take the first conflict only, pick the activity to move,
//!    compile its instructions, and push one child per candidate move.
//!
//! Each node owns its schedule. Children share untouched days with their
//! parent (copy-on-write), so no node ever observes another's edits.
//!
//! # Complexity
//! At most `top_k^max_depth` expansions before deduplication.

use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::config::{SearchConfig, DEFAULT_TARGET_DAY};
use super::hash::canonical_hash;
use super::moves::Move;
use super::score::{evaluate_full, evaluate_partial};
use crate::compiler::InstructionCompiler;
use crate::conflict::{conflict_count, first_conflict, select_to_move};
use crate::error::{ResolveError, Result};
use crate::models::{Activity, Schedule};
use crate::validation::{validate_activity, validate_schedule};

/// Input container for conflict resolution.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Schedule before insertion. Never modified.
    pub base: Schedule,
    /// Activity to insert.
    pub activity: Activity,
    /// Day that receives the new activity.
    pub target_day: String,
}

impl ResolveRequest {
    /// Creates a request inserting `activity` on the default day.
    pub fn new(base: Schedule, activity: Activity) -> Self {
        Self {
            base,
            activity,
            target_day: DEFAULT_TARGET_DAY.to_string(),
        }
    }

    /// Sets the day that receives the new activity.
    pub fn with_target_day(mut self, day: impl Into<String>) -> Self {
        self.target_day = day.into();
        self
    }

    /// The root search state: base schedule plus the appended activity.
    pub fn initial_state(&self) -> ScheduleState {
        let mut schedule = self.base.clone();
        schedule.add_activity(&self.target_day, self.activity.clone());
        ScheduleState {
            score: evaluate_partial(&schedule),
            schedule,
            moved_activities: BTreeSet::new(),
            depth: 0,
        }
    }
}

/// A search node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleState {
    /// Schedule snapshot owned by this node.
    pub schedule: Schedule,
    /// IDs of activities relocated on the way to this node.
    pub moved_activities: BTreeSet<String>,
    /// Partial score while searching; full score once resolved.
    pub score: f64,
    /// Number of relocations applied since the initial state.
    pub depth: usize,
}

impl ScheduleState {
    /// Number of conflicting pairs in this state's schedule.
    pub fn conflict_count(&self) -> usize {
        conflict_count(&self.schedule)
    }

    /// Whether the schedule is conflict-free.
    pub fn is_conflict_free(&self) -> bool {
        first_conflict(&self.schedule).is_none()
    }

    /// Child state with `activity` relocated per `mv`.
    ///
    /// The activity is removed from every day, then appended to the
    /// move's day at the move's window.
    fn relocate(&self, activity: &Activity, mv: &Move) -> ScheduleState {
        let mut schedule = self.schedule.clone();
        schedule.remove_activity(&activity.id);
        schedule.add_activity(&mv.day, activity.relocated(mv.window()));

        let mut moved_activities = self.moved_activities.clone();
        moved_activities.insert(activity.id.clone());

        ScheduleState {
            score: evaluate_partial(&schedule),
            schedule,
            moved_activities,
            depth: self.depth + 1,
        }
    }
}

/// Why a search ended without a conflict-free schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExhaustionReason {
    /// Every reachable state within the depth bound was explored.
    FrontierEmpty,
    /// `max_expansions` was reached.
    ExpansionBudget,
}

/// Terminal result of a search.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveOutcome {
    /// A conflict-free schedule was found.
    Resolved(ScheduleState),
    /// No conflict-free schedule was found.
    Exhausted {
        /// The untouched initial state.
        initial: ScheduleState,
        /// The popped state with the fewest conflicts (earliest on ties),
        /// including states later pruned at the depth bound.
        best_seen: ScheduleState,
        /// Why the search stopped.
        reason: ExhaustionReason,
    },
}

impl ResolveOutcome {
    /// Whether a conflict-free schedule was found.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// The resolved state, or the initial state on exhaustion.
    pub fn state(&self) -> &ScheduleState {
        match self {
            Self::Resolved(state) => state,
            Self::Exhausted { initial, .. } => initial,
        }
    }

    /// The resolved state, or the best popped state on exhaustion.
    pub fn best(&self) -> &ScheduleState {
        match self {
            Self::Resolved(state) => state,
            Self::Exhausted { best_seen, .. } => best_seen,
        }
    }

    /// Consumes the outcome, yielding the resolved state or the
    /// unmodified initial state.
    pub fn into_state(self) -> ScheduleState {
        match self {
            Self::Resolved(state) => state,
            Self::Exhausted { initial, .. } => initial,
        }
    }
}

/// Search counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes whose children were generated.
    pub expanded: usize,
    /// Nodes dropped at the depth bound.
    pub pruned: usize,
    /// Nodes skipped because an equivalent schedule was already seen.
    pub duplicates: usize,
    /// Child nodes pushed onto the frontier.
    pub generated: usize,
}

/// Outcome plus counters of one search.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Terminal result.
    pub outcome: ResolveOutcome,
    /// Work done.
    pub stats: SearchStats,
}

impl Resolution {
    /// See [`ResolveOutcome::into_state`].
    pub fn into_state(self) -> ScheduleState {
        self.outcome.into_state()
    }
}

/// Frontier entry ordered by partial score, then insertion order.
struct Node {
    score: i64,
    seq: u64,
    state: ScheduleState,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    // Max-heap: higher score first, then lower sequence number.
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Best-first search for a conflict-free schedule.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use optisched::models::{Activity, Schedule};
/// use optisched::search::{ConflictResolver, ResolveRequest};
///
/// let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
/// let base = Schedule::new().with_day(
///     "Monday",
///     vec![Activity::new("Gym", 2, t(9), t(10)).with_instructions("flexible")],
/// );
/// let study = Activity::new("Study", 4, t(9), t(10)).with_instructions("must");
///
/// let resolution = ConflictResolver::new().resolve(&ResolveRequest::new(base, study));
/// assert!(resolution.outcome.is_resolved());
///
/// let state = resolution.into_state();
/// assert_eq!(state.score, 100.0);
/// assert!(state.moved_activities.contains("Gym"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConflictResolver {
    config: SearchConfig,
    compiler: InstructionCompiler,
}

impl ConflictResolver {
    /// Creates a resolver with default configuration and rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search configuration.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the instruction compiler.
    pub fn with_compiler(mut self, compiler: InstructionCompiler) -> Self {
        self.compiler = compiler;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Validates the configuration and input, then searches.
    ///
    /// The inserted activity is validated together with the schedule it
    /// lands in, so an ID clash with the target day is reported.
    pub fn resolve_checked(&self, request: &ResolveRequest) -> Result<Resolution> {
        self.config.validate().map_err(ResolveError::InvalidConfig)?;
        validate_activity(&request.activity)?;
        validate_schedule(&request.initial_state().schedule)?;
        Ok(self.resolve(request))
    }

    /// Searches for a conflict-free arrangement. Input is not validated.
    pub fn resolve(&self, request: &ResolveRequest) -> Resolution {
        let initial = request.initial_state();
        let generator = self.config.move_generator();
        let mut stats = SearchStats::default();

        debug!(
            days = initial.schedule.day_count(),
            activities = initial.schedule.activity_count(),
            target_day = %request.target_day,
            inserted = %request.activity.id,
            conflicts = -initial.score,
            "starting conflict resolution"
        );

        let mut frontier = BinaryHeap::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut best_seen: Option<ScheduleState> = None;
        let mut seq: u64 = 0;

        frontier.push(Node {
            score: initial.score as i64,
            seq,
            state: initial.clone(),
        });

        while let Some(Node { state, .. }) = frontier.pop() {
            if !visited.insert(canonical_hash(&state.schedule)) {
                stats.duplicates += 1;
                continue;
            }

            let to_move = first_conflict(&state.schedule)
                .map(|c| select_to_move(c.first, c.second).clone());
            let Some(to_move) = to_move else {
                let mut state = state;
                state.score = evaluate_full(&state.schedule);
                debug!(
                    depth = state.depth,
                    moved = ?state.moved_activities,
                    expanded = stats.expanded,
                    "resolved schedule"
                );
                return Resolution {
                    outcome: ResolveOutcome::Resolved(state),
                    stats,
                };
            };

            if best_seen.as_ref().map_or(true, |b| state.score > b.score) {
                best_seen = Some(state.clone());
            }

            if state.depth >= self.config.max_depth {
                stats.pruned += 1;
                continue;
            }

            if self
                .config
                .max_expansions
                .is_some_and(|limit| stats.expanded >= limit)
            {
                let reason = ExhaustionReason::ExpansionBudget;
                return self.exhausted(initial, best_seen, reason, stats);
            }
            stats.expanded += 1;

            let constraints = self.compiler.compile(&to_move.instructions);
            let moves = generator.generate(&to_move, &state.schedule, &constraints);

            trace!(
                depth = state.depth,
                score = state.score,
                to_move = %to_move.id,
                candidates = moves.len(),
                "expanding state"
            );

            for mv in &moves {
                let child = state.relocate(&to_move, mv);
                seq += 1;
                frontier.push(Node {
                    score: child.score as i64,
                    seq,
                    state: child,
                });
                stats.generated += 1;
            }
        }

        self.exhausted(initial, best_seen, ExhaustionReason::FrontierEmpty, stats)
    }

    fn exhausted(
        &self,
        initial: ScheduleState,
        best_seen: Option<ScheduleState>,
        reason: ExhaustionReason,
        stats: SearchStats,
    ) -> Resolution {
        let best_seen = best_seen.unwrap_or_else(|| initial.clone());
        warn!(
            ?reason,
            remaining_conflicts = best_seen.conflict_count(),
            expanded = stats.expanded,
            max_depth = self.config.max_depth,
            "search exhausted without a conflict-free schedule"
        );
        Resolution {
            outcome: ResolveOutcome::Exhausted {
                initial,
                best_seen,
                reason,
            },
            stats,
        }
    }
}
