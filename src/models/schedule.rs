//! Schedule (result) model.
//!
//! A schedule result pairs the per-process metric table with the ordered
//! execution timeline (the Gantt chart data).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Process;

/// CPU scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulingAlgorithm {
    /// First-Come, First-Served in input order.
    Fcfs,
    /// Shortest Job First, non-preemptive.
    Sjf,
    /// Round-Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum slice length per dispatch.
        quantum: i64,
    },
}

impl fmt::Display for SchedulingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "FCFS"),
            Self::Sjf => write!(f, "SJF"),
            Self::RoundRobin { quantum } => write!(f, "Round Robin (q={quantum})"),
        }
    }
}

/// Timing metrics of one process after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRow {
    /// Process ID.
    pub id: String,
    /// Arrival time (AT).
    pub arrival_time: i64,
    /// Burst time (BT).
    pub burst_time: i64,
    /// First time the process held the CPU.
    pub start_time: i64,
    /// Completion time (CT).
    pub completion_time: i64,
    /// Turnaround time (TAT = CT - AT).
    pub turnaround_time: i64,
    /// Waiting time (WT = TAT - BT).
    pub waiting_time: i64,
}

impl ProcessRow {
    /// Derives the row for `process` from its start and completion times.
    pub fn new(process: &Process, start_time: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            start_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
        }
    }

    /// Time between arrival and first dispatch.
    #[inline]
    pub fn response_time(&self) -> i64 {
        self.start_time - self.arrival_time
    }
}

/// A contiguous interval during which one process held the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Running process.
    pub process_id: String,
    /// Slice start (inclusive).
    pub start: i64,
    /// Slice end (exclusive).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a slice.
    pub fn new(process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Slice length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Output of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Discipline that produced this result.
    pub algorithm: SchedulingAlgorithm,
    /// Per-process metrics, in the order the discipline reports them.
    pub rows: Vec<ProcessRow>,
    /// Execution slices in time order.
    pub timeline: Vec<ExecutionSlice>,
}

impl ScheduleResult {
    /// Creates an empty result for `algorithm`.
    pub fn new(algorithm: SchedulingAlgorithm) -> Self {
        Self {
            algorithm,
            rows: Vec::new(),
            timeline: Vec::new(),
        }
    }

    /// Finds the row for a process.
    pub fn row(&self, process_id: &str) -> Option<&ProcessRow> {
        self.rows.iter().find(|r| r.id == process_id)
    }

    /// All slices for a process, in time order.
    pub fn slices_for(&self, process_id: &str) -> Vec<&ExecutionSlice> {
        self.timeline
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Latest completion time (0 for an empty result).
    pub fn makespan(&self) -> i64 {
        self.rows
            .iter()
            .map(|r| r.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.timeline.iter().map(ExecutionSlice::duration).sum()
    }

    /// Mean waiting time, `None` for an empty result.
    pub fn average_waiting_time(&self) -> Option<f64> {
        self.mean_of(|r| r.waiting_time)
    }

    /// Mean turnaround time, `None` for an empty result.
    pub fn average_turnaround_time(&self) -> Option<f64> {
        self.mean_of(|r| r.turnaround_time)
    }

    // Summed in f64: per-row values fit in i64 but their total may not
    fn mean_of(&self, f: impl Fn(&ProcessRow) -> i64) -> Option<f64> {
        if self.rows.is_empty() {
            return None;
        }
        let sum: f64 = self.rows.iter().map(|r| f(r) as f64).sum();
        Some(sum / self.rows.len() as f64)
    }
}
