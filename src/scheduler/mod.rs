//! CPU scheduling engine.
//!
//! Simulates a single CPU serving a process set under one of three
//! classic disciplines and reports per-process timing rows plus the
//! execution timeline.
//!
//! # Disciplines
//!
//! | Discipline | Preemptive | Service order | Row order |
//! |------------|-----------|---------------|-----------|
//! | FCFS | no | input order | input |
//! | SJF | no | shortest ready burst | arrival |
//! | Round-Robin | time slice | FIFO ready queue | input |
//!
//! # KPI
//!
//! `ScheduleKpi` computes averages, utilization, and throughput of a result.
//!
//! # Usage
//!
//! ```
//! use os_sim::models::Process;
//! use os_sim::scheduler::{schedule, SchedulingAlgorithm};
//!
//! let processes = vec![Process::new("P1", 4), Process::new("P2", 3).with_arrival(1)];
//! let result = schedule(&processes, SchedulingAlgorithm::Fcfs).unwrap();
//!
//! let p2 = result.row("P2").unwrap();
//! assert_eq!((p2.completion_time, p2.waiting_time), (7, 3));
//! ```

mod fcfs;
mod kpi;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use kpi::ScheduleKpi;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

pub use crate::models::SchedulingAlgorithm;

use std::fmt::Debug;

use tracing::debug;

use crate::error::SimError;
use crate::models::{Process, ScheduleResult};
use crate::validation::{validate_processes, validate_quantum};

/// Quantum used when the caller does not pick one.
pub const DEFAULT_QUANTUM: i64 = 4;

/// A single-CPU scheduling discipline.
///
/// `run` assumes validated input (see [`schedule`]); on invalid input it
/// still terminates but the metrics are meaningless.
pub trait CpuScheduler: Send + Sync + Debug {
    /// Discipline name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// The algorithm descriptor recorded in results.
    fn algorithm(&self) -> SchedulingAlgorithm;

    /// Simulates the process set to completion.
    fn run(&self, processes: &[Process]) -> ScheduleResult;
}

/// Runs one scheduling simulation.
///
/// # Errors
/// `InvalidInput` with every detected problem if the process list is
/// empty, has duplicate IDs, a burst time below 1, a negative arrival
/// time, a latest arrival plus total burst beyond `i64::MAX`, or
/// (Round-Robin) a quantum below 1.
pub fn schedule(
    processes: &[Process],
    algorithm: SchedulingAlgorithm,
) -> Result<ScheduleResult, SimError> {
    let mut errors = validate_processes(processes).err().unwrap_or_default();
    if let SchedulingAlgorithm::RoundRobin { quantum } = algorithm {
        if let Err(quantum_errors) = validate_quantum(quantum) {
            errors.extend(quantum_errors);
        }
    }
    if !errors.is_empty() {
        return Err(SimError::InvalidInput(errors));
    }

    let scheduler: Box<dyn CpuScheduler> = match algorithm {
        SchedulingAlgorithm::Fcfs => Box::new(Fcfs),
        SchedulingAlgorithm::Sjf => Box::new(Sjf),
        SchedulingAlgorithm::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)?),
    };

    debug!(
        scheduler = scheduler.name(),
        processes = processes.len(),
        "scheduling run"
    );
    let result = scheduler.run(processes);
    debug!(
        scheduler = scheduler.name(),
        %algorithm,
        makespan = result.makespan(),
        dispatches = result.timeline.len(),
        "scheduling run complete"
    );

    Ok(result)
}

/// Input container for a scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Discipline to apply.
    pub algorithm: SchedulingAlgorithm,
}

impl ScheduleRequest {
    /// Creates an FCFS request.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            algorithm: SchedulingAlgorithm::Fcfs,
        }
    }

    /// Creates a request from parallel burst/arrival arrays (`P1..Pn`).
    ///
    /// # Errors
    /// `InvalidInput` if the arrays differ in length.
    pub fn from_parallel(burst_times: &[i64], arrival_times: &[i64]) -> Result<Self, SimError> {
        Ok(Self::new(Process::from_parallel(burst_times, arrival_times)?))
    }

    /// Sets the discipline.
    pub fn with_algorithm(mut self, algorithm: SchedulingAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Runs the request.
    pub fn run(&self) -> Result<ScheduleResult, SimError> {
        schedule(&self.processes, self.algorithm)
    }
}
