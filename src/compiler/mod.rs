//! Instruction compiler: free text → structured constraints.
//!
//! Instructions are classified by an ordered table of keyword rules.
//! Every rule is evaluated independently against the lower-cased text;
//! rules are not mutually exclusive and have no precedence other than
//! table order (a later rule may overwrite a preference set earlier).
//!
//! This is a deterministic keyword classifier, not a grammar.
//!
//! # Usage
//!
//! ```
//! use optisched::compiler::InstructionCompiler;
//!
//! let compiler = InstructionCompiler::default();
//! let c = compiler.compile("I must go, ideally in the morning. Avoid Friday!");
//!
//! assert_eq!(c.hard_constraints, vec![
//!     "I must go, ideally in the morning. Avoid Friday!".to_string(),
//!     "forbidden_day:Friday".to_string(),
//! ]);
//! assert_eq!(c.soft_constraints.len(), 1);
//! assert!(c.preferred_time().is_some());
//! ```

mod engine;
pub mod rules;

pub use engine::InstructionCompiler;

use crate::models::CompiledConstraints;
use std::fmt::Debug;

/// A keyword rule that contributes to compiled constraints.
///
/// `matches` sees the lower-cased text; `apply` receives the raw text so
/// rules can record the instruction verbatim.
pub trait InstructionRule: Send + Sync + Debug {
    /// Rule name (e.g., "HARD_KEYWORD").
    fn name(&self) -> &'static str;

    /// Whether the rule fires for the lower-cased instruction text.
    fn matches(&self, lowered: &str) -> bool;

    /// Records the rule's effect.
    fn apply(&self, raw: &str, constraints: &mut CompiledConstraints);
}

/// Compiles instruction text with the default rule table.
pub fn compile_instructions(text: &str) -> CompiledConstraints {
    InstructionCompiler::default().compile(text)
}
