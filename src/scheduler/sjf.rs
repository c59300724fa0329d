//! Shortest Job First (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time.
//! 2. Among arrived, unfinished processes pick the smallest burst time;
//!    ties go to the earliest entry of the sorted order.
//! 3. Run it to completion and advance the clock.
//! 4. If nothing has arrived, jump to the earliest unfinished arrival.
//!
//! Rows are reported in arrival-sorted order; the timeline is in
//! execution order.
//!
//! # Complexity
//! O(n²)
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", §5.3.2

use tracing::trace;

use super::CpuScheduler;
use crate::models::{ExecutionSlice, Process, ProcessRow, ScheduleResult, SchedulingAlgorithm};

/// Non-preemptive Shortest Job First scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl CpuScheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn algorithm(&self) -> SchedulingAlgorithm {
        SchedulingAlgorithm::Sjf
    }

    fn run(&self, processes: &[Process]) -> ScheduleResult {
        let mut sorted: Vec<&Process> = processes.iter().collect();
        sorted.sort_by_key(|p| p.arrival_time);

        let n = sorted.len();
        let mut start = vec![0; n];
        let mut completion = vec![0; n];
        let mut done = vec![false; n];
        let mut remaining = n;
        let mut clock = 0;
        let mut result = ScheduleResult::new(self.algorithm());

        while remaining > 0 {
            let ready = (0..n)
                .filter(|&i| !done[i] && sorted[i].arrival_time <= clock)
                .min_by_key(|&i| sorted[i].burst_time);

            let Some(next) = ready else {
                // CPU idle until the earliest unfinished arrival
                match (0..n)
                    .filter(|&i| !done[i])
                    .map(|i| sorted[i].arrival_time)
                    .min()
                {
                    Some(arrival) => clock = arrival,
                    None => break,
                }
                continue;
            };

            start[next] = clock;
            completion[next] = clock + sorted[next].burst_time;
            done[next] = true;
            remaining -= 1;
            trace!(process = %sorted[next].id, start = clock, end = completion[next], "dispatch");

            result.timeline.push(ExecutionSlice::new(
                &sorted[next].id,
                start[next],
                completion[next],
            ));
            clock = completion[next];
        }

        result.rows = sorted
            .iter()
            .enumerate()
            .map(|(i, p)| ProcessRow::new(p, start[i], completion[i]))
            .collect();
        result
    }
}
