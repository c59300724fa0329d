//! First-Come, First-Served.
//!
//! # Algorithm
//!
//! Processes run to completion in the order they were supplied:
//! `start[i] = max(completion[i-1], arrival[i])`, with `completion[-1] = 0`.
//!
//! Input order is authoritative. A list whose order disagrees with the
//! arrival times is served in list order, so a later entry with an earlier
//! arrival still waits for everything listed before it.
//!
//! # Complexity
//! O(n)

use tracing::trace;

use super::CpuScheduler;
use crate::models::{ExecutionSlice, Process, ProcessRow, ScheduleResult, SchedulingAlgorithm};

/// First-Come, First-Served scheduler (input order, non-preemptive).
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl CpuScheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn algorithm(&self) -> SchedulingAlgorithm {
        SchedulingAlgorithm::Fcfs
    }

    fn run(&self, processes: &[Process]) -> ScheduleResult {
        let mut result = ScheduleResult::new(self.algorithm());
        let mut clock = 0;

        for process in processes {
            let start = clock.max(process.arrival_time);
            let completion = start + process.burst_time;
            trace!(process = %process.id, start, end = completion, "dispatch");

            result
                .timeline
                .push(ExecutionSlice::new(&process.id, start, completion));
            result.rows.push(ProcessRow::new(process, start, completion));
            clock = completion;
        }

        result
    }
}
