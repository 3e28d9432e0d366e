//! Ordered rule table for instruction compilation.

use std::sync::Arc;

use super::rules::{ForbiddenDay, HardKeyword, PreferredWindow, SoftKeyword};
use super::InstructionRule;
use crate::models::CompiledConstraints;

/// Compiles instruction text by running every rule in table order.
///
/// # Example
/// ```
/// use optisched::compiler::{rules, InstructionCompiler};
///
/// let compiler = InstructionCompiler::default().with_rule(rules::ForbiddenDay::new("Sunday"));
/// let c = compiler.compile("avoid sunday");
/// assert!(c.forbids_day("Sunday"));
/// ```
#[derive(Debug, Clone)]
pub struct InstructionCompiler {
    rules: Vec<Arc<dyn InstructionRule>>,
}

impl InstructionCompiler {
    /// Creates a compiler with no rules (compiles everything to empty).
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule to the end of the table.
    pub fn with_rule<R: InstructionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Number of rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Compiles instruction text. Never fails; unmatched text yields
    /// empty constraints.
    pub fn compile(&self, text: &str) -> CompiledConstraints {
        let lowered = text.to_lowercase();
        let mut constraints = CompiledConstraints::new();
        for rule in &self.rules {
            if rule.matches(&lowered) {
                rule.apply(text, &mut constraints);
            }
        }
        constraints
    }
}

impl Default for InstructionCompiler {
    fn default() -> Self {
        Self::empty()
            .with_rule(HardKeyword::default())
            .with_rule(SoftKeyword::default())
            .with_rule(PreferredWindow::morning())
            .with_rule(PreferredWindow::afternoon())
            .with_rule(ForbiddenDay::new("Friday"))
    }
}
