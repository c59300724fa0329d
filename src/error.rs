//! Error type shared by both engines.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the simulation engines and input helpers.
///
/// Unallocated memory requests are *not* errors; they are reported as
/// ordinary outcomes in [`AllocationResult`](crate::models::AllocationResult).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// The caller supplied inputs that violate an engine precondition.
    ///
    /// Carries every problem found, not just the first one.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl SimError {
    /// Wraps a single validation error.
    pub fn invalid(error: ValidationError) -> Self {
        Self::InvalidInput(vec![error])
    }

    /// The validation errors behind this failure.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
