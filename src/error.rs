//! Error types for checked conflict resolution.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type for checked resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors raised before the search starts.
///
/// The search itself never fails: running out of candidates is reported
/// as `ResolveOutcome::Exhausted`, not as an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// The schedule or the inserted activity is malformed.
    #[error("Invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The search configuration is degenerate.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for ResolveError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}
