//! Simulation configuration.
//!
//! Holds the defaults and input bounds a front end applies before calling
//! the engines. The engines themselves never read configuration and never
//! clamp; clamping belongs to whoever collects the input.
//!
//! All fields have defaults, so a partial document deserializes:
//!
//! ```
//! use os_sim::config::SimulationConfig;
//!
//! let config: SimulationConfig = serde_json::from_str(r#"{ "default_quantum": 2 }"#).unwrap();
//! assert_eq!(config.default_quantum, 2);
//! assert_eq!(config.limits.max_processes, 5);
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::models::Process;
use crate::scheduler::DEFAULT_QUANTUM;
use crate::validation::{validate_quantum, ValidationError, ValidationErrorKind};

/// Bounds applied when collecting scheduling input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// Fewest processes per run.
    pub min_processes: usize,
    /// Most processes per run.
    pub max_processes: usize,
    /// Smallest burst time.
    pub min_burst: i64,
    /// Largest burst time.
    pub max_burst: i64,
    /// Earliest arrival time.
    pub min_arrival: i64,
    /// Latest arrival time.
    pub max_arrival: i64,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_processes: 1,
            max_processes: 5,
            min_burst: 1,
            max_burst: 20,
            min_arrival: 0,
            max_arrival: 20,
        }
    }
}

impl InputLimits {
    /// Allowed process counts.
    pub fn process_range(&self) -> RangeInclusive<usize> {
        self.min_processes..=self.max_processes
    }

    /// Allowed burst times.
    pub fn burst_range(&self) -> RangeInclusive<i64> {
        self.min_burst..=self.max_burst
    }

    /// Allowed arrival times.
    pub fn arrival_range(&self) -> RangeInclusive<i64> {
        self.min_arrival..=self.max_arrival
    }

    /// Clamps a process count into range.
    pub fn clamp_count(&self, count: usize) -> usize {
        count.clamp(self.min_processes, self.max_processes)
    }

    /// Clamps a process's burst and arrival times into range.
    pub fn clamp_process(&self, process: &Process) -> Process {
        Process {
            id: process.id.clone(),
            arrival_time: process.arrival_time.clamp(self.min_arrival, self.max_arrival),
            burst_time: process.burst_time.clamp(self.min_burst, self.max_burst),
        }
    }

    /// Checks that every range is well formed and that clamped values are
    /// valid engine input.
    pub fn validate(&self) -> Result<(), SimError> {
        let mut errors = Vec::new();
        let mut check = |name: &str, ok: bool| {
            if !ok {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidLimits,
                    format!("Invalid {name} limits"),
                ));
            }
        };

        check(
            "process count",
            self.min_processes >= 1 && self.min_processes <= self.max_processes,
        );
        check("burst", self.min_burst >= 1 && self.min_burst <= self.max_burst);
        check(
            "arrival",
            self.min_arrival >= 0 && self.min_arrival <= self.max_arrival,
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SimError::InvalidInput(errors))
        }
    }
}

/// Defaults for a simulation front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round-Robin quantum offered by default.
    pub default_quantum: i64,
    /// Scheduling input bounds.
    pub limits: InputLimits,
    /// Block sizes pre-filled in the allocation form.
    pub default_blocks: Vec<u64>,
    /// Request sizes pre-filled in the allocation form.
    pub default_requests: Vec<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            default_quantum: DEFAULT_QUANTUM,
            limits: InputLimits::default(),
            default_blocks: vec![100, 500, 200, 300, 600],
            default_requests: vec![212, 417, 112, 426],
        }
    }
}

impl SimulationConfig {
    /// Sets the default quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.default_quantum = quantum;
        self
    }

    /// Sets the input limits.
    pub fn with_limits(mut self, limits: InputLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Checks the quantum and the limits.
    pub fn validate(&self) -> Result<(), SimError> {
        let mut errors = validate_quantum(self.default_quantum)
            .err()
            .unwrap_or_default();
        if let Err(e) = self.limits.validate() {
            errors.extend_from_slice(e.errors());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(SimError::InvalidInput(errors))
        }
    }
}
