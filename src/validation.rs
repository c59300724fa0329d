//! Input validation for simulation runs.
//!
//! Checks engine preconditions before any simulation work starts.
//! Detects:
//! - Empty process lists
//! - Duplicate process IDs
//! - Non-positive burst times and negative arrival times
//! - Non-positive Round-Robin quanta
//! - Parallel input arrays of different lengths
//!
//! The engines never clamp. Clamping to UI bounds is a boundary policy,
//! see [`InputLimits`](crate::config::InputLimits).

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Nothing to simulate.
    EmptyInput,
    /// Two processes share the same ID.
    DuplicateId,
    /// A burst time is zero or negative.
    NonPositiveBurst,
    /// An arrival time is negative.
    NegativeArrival,
    /// A Round-Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Parallel input arrays differ in length.
    LengthMismatch,
    /// A list element could not be parsed.
    MalformedToken,
    /// A configured range has min > max.
    InvalidLimits,
    /// Latest arrival plus total burst time exceeds the time axis.
    TimeOverflow,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set for scheduling.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. Every burst time >= 1
/// 4. Every arrival time >= 0
/// 5. `max(arrival) + Σburst` fits in `i64` (no completion time can exceed it)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Process list is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst time {}", p.id, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival time {}", p.id, p.arrival_time),
            ));
        }
    }

    if horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the time axis",
        ));
    }

    into_result(errors)
}

/// Upper bound on every simulated time: latest arrival plus all bursts.
///
/// Negative values contribute nothing; those are reported separately.
fn horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time.max(0)))
}

/// Validates a Round-Robin time quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum < 1 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Quantum must be at least 1, got {quantum}"),
        )]);
    }
    Ok(())
}

/// Checks that two parallel input arrays have the same length.
pub fn validate_parallel_lengths(
    left_name: &str,
    left_len: usize,
    right_name: &str,
    right_len: usize,
) -> ValidationResult {
    if left_len != right_len {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!("{left_name} has {left_len} entries but {right_name} has {right_len}"),
        )]);
    }
    Ok(())
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
