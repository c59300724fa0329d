//! Process model.
//!
//! A process is a unit of CPU work: it becomes ready at its arrival time
//! and needs `burst_time` units of CPU to finish.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::validation::validate_parallel_lengths;

/// A process to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (e.g. "P1").
    pub id: String,
    /// Time at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
}

impl Process {
    /// Creates a process arriving at t=0.
    pub fn new(id: impl Into<String>, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time: 0,
            burst_time,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Label used for the `index`-th (0-based) process: `P1`, `P2`, ...
    pub fn label(index: usize) -> String {
        format!("P{}", index + 1)
    }

    /// Builds labelled processes from parallel burst/arrival arrays.
    ///
    /// Values are taken as given; range checks happen when scheduling.
    ///
    /// # Errors
    /// `InvalidInput` if the arrays differ in length.
    pub fn from_parallel(
        burst_times: &[i64],
        arrival_times: &[i64],
    ) -> Result<Vec<Self>, SimError> {
        validate_parallel_lengths(
            "burst times",
            burst_times.len(),
            "arrival times",
            arrival_times.len(),
        )
        .map_err(SimError::InvalidInput)?;

        Ok(burst_times
            .iter()
            .zip(arrival_times)
            .enumerate()
            .map(|(i, (&burst, &arrival))| Self::new(Self::label(i), burst).with_arrival(arrival))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 4).with_arrival(2);
        assert_eq!(p.id, "P1");
        assert_eq!(p.burst_time, 4);
        assert_eq!(p.arrival_time, 2);
    }

    #[test]
    fn test_from_parallel() {
        let processes = Process::from_parallel(&[4, 3, 1], &[0, 1, 2]).unwrap();
        assert_eq!(processes.len(), 3);
        assert_eq!(processes[0], Process::new("P1", 4));
        assert_eq!(processes[2].id, "P3");
        assert_eq!(processes[2].arrival_time, 2);
    }

    #[test]
    fn test_from_parallel_mismatch() {
        let err = Process::from_parallel(&[4, 3], &[0]).unwrap_err();
        assert_eq!(err.errors()[0].kind, ValidationErrorKind::LengthMismatch);
    }
}
