//! Round-Robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! Each step:
//! 1. Append every arrived, unfinished, not-yet-queued process to the
//!    ready queue, in input order.
//! 2. Dequeue the head and run it for `min(quantum, remaining)`.
//! 3. Re-enqueue it at the tail if work remains, else record completion.
//!
//! Processes that arrive during a slice are therefore queued *behind*
//! the process that was just preempted. With an empty queue the clock
//! jumps to the next arrival.
//!
//! # Complexity
//! O(n · Σburst / quantum)
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", §5.3.3

use std::collections::VecDeque;

use tracing::trace;

use super::CpuScheduler;
use crate::error::SimError;
use crate::models::{ExecutionSlice, Process, ProcessRow, ScheduleResult, SchedulingAlgorithm};
use crate::validation::validate_quantum;

/// Preemptive Round-Robin scheduler.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round-Robin scheduler.
    ///
    /// # Errors
    /// `InvalidInput` if `quantum < 1`.
    pub fn new(quantum: i64) -> Result<Self, SimError> {
        validate_quantum(quantum).map_err(SimError::InvalidInput)?;
        Ok(Self { quantum })
    }
}

impl CpuScheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn algorithm(&self) -> SchedulingAlgorithm {
        SchedulingAlgorithm::RoundRobin {
            quantum: self.quantum,
        }
    }

    fn run(&self, processes: &[Process]) -> ScheduleResult {
        let n = processes.len();
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
        let mut first_start: Vec<Option<i64>> = vec![None; n];
        let mut completion = vec![0; n];
        let mut queued = vec![false; n];
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);
        let mut clock = 0;
        let mut result = ScheduleResult::new(self.algorithm());

        while remaining.iter().any(|&r| r > 0) {
            for (i, p) in processes.iter().enumerate() {
                if p.arrival_time <= clock && remaining[i] > 0 && !queued[i] {
                    queue.push_back(i);
                    queued[i] = true;
                }
            }

            let Some(i) = queue.pop_front() else {
                // Idle: every unfinished process arrives after `clock`
                clock = processes
                    .iter()
                    .zip(&remaining)
                    .filter(|(_, &r)| r > 0)
                    .map(|(p, _)| p.arrival_time)
                    .min()
                    .unwrap_or(clock)
                    .max(clock + 1);
                continue;
            };
            queued[i] = false;

            let run = self.quantum.min(remaining[i]);
            let end = clock + run;
            trace!(process = %processes[i].id, start = clock, end, "dispatch");

            first_start[i].get_or_insert(clock);
            result
                .timeline
                .push(ExecutionSlice::new(&processes[i].id, clock, end));
            clock = end;
            remaining[i] -= run;

            if remaining[i] > 0 {
                queue.push_back(i);
                queued[i] = true;
            } else {
                completion[i] = clock;
            }
        }

        result.rows = processes
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let start = first_start[i].unwrap_or(p.arrival_time);
                ProcessRow::new(p, start, completion[i])
            })
            .collect();
        result
    }
}
