//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling performance indicators from a
//! completed [`ScheduleResult`].
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Avg / Max Waiting | Mean / largest of TAT - BT |
//! | Avg Turnaround | Mean of CT - AT |
//! | Avg Response | Mean of first dispatch - AT |
//! | Utilization | Busy time / makespan |
//! | Throughput | Processes completed per time unit |
//! | Context Switches | Adjacent slices owned by different processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", §5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::ScheduleResult;

/// Scheduling performance indicators.
///
/// All time values are in simulation time units. The horizon starts at t=0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Largest waiting time of any process.
    pub max_waiting_time: i64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Time the CPU spent running processes.
    pub busy_time: i64,
    /// Time the CPU spent idle before the makespan.
    pub idle_time: i64,
    /// Busy fraction of the horizon (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Number of dispatches (timeline slices).
    pub dispatches: usize,
    /// Dispatches that changed the running process.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule result.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let makespan = result.makespan();
        let busy_time = result.busy_time();
        let count = result.rows.len();

        let max_waiting_time = result
            .rows
            .iter()
            .map(|r| r.waiting_time)
            .max()
            .unwrap_or(0);

        let avg_response_time = if count == 0 {
            0.0
        } else {
            let sum: f64 = result.rows.iter().map(|r| r.response_time() as f64).sum();
            sum / count as f64
        };

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                count as f64 / makespan as f64,
            )
        };

        let context_switches = result
            .timeline
            .windows(2)
            .filter(|pair| pair[0].process_id != pair[1].process_id)
            .count();

        Self {
            makespan,
            avg_waiting_time: result.average_waiting_time().unwrap_or(0.0),
            max_waiting_time,
            avg_turnaround_time: result.average_turnaround_time().unwrap_or(0.0),
            avg_response_time,
            busy_time,
            idle_time: (makespan - busy_time).max(0),
            cpu_utilization,
            throughput,
            dispatches: result.timeline.len(),
            context_switches,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting_time <= max_avg_waiting && self.cpu_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecutionSlice, Process, ProcessRow, SchedulingAlgorithm};

    fn rr_result() -> ScheduleResult {
        // P1(BT=4), P2(BT=2), quantum 2
        let mut r = ScheduleResult::new(SchedulingAlgorithm::RoundRobin { quantum: 2 });
        r.rows.push(ProcessRow::new(&Process::new("P1", 4), 0, 6));
        r.rows.push(ProcessRow::new(&Process::new("P2", 2), 2, 4));
        r.timeline.push(ExecutionSlice::new("P1", 0, 2));
        r.timeline.push(ExecutionSlice::new("P2", 2, 4));
        r.timeline.push(ExecutionSlice::new("P1", 4, 6));
        r
    }

    #[test]
    fn test_kpi_basic() {
        let kpi = ScheduleKpi::calculate(&rr_result());
        assert_eq!(kpi.makespan, 6);
        assert!((kpi.avg_waiting_time - 2.0).abs() < 1e-10);
        assert_eq!(kpi.max_waiting_time, 2);
        assert!((kpi.avg_turnaround_time - 5.0).abs() < 1e-10);
        assert!((kpi.avg_response_time - 1.0).abs() < 1e-10); // (0 + 2) / 2
        assert_eq!(kpi.dispatches, 3);
        assert_eq!(kpi.context_switches, 2);
    }

    #[test]
    fn test_kpi_idle_time() {
        let mut r = ScheduleResult::new(SchedulingAlgorithm::Fcfs);
        r.rows.push(ProcessRow::new(&Process::new("P1", 2), 0, 2));
        r.rows.push(ProcessRow::new(&Process::new("P2", 2).with_arrival(6), 6, 8));
        r.timeline.push(ExecutionSlice::new("P1", 0, 2));
        r.timeline.push(ExecutionSlice::new("P2", 6, 8));

        let kpi = ScheduleKpi::calculate(&r);
        assert_eq!(kpi.busy_time, 4);
        assert_eq!(kpi.idle_time, 4);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((kpi.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_same_process_back_to_back() {
        let mut r = ScheduleResult::new(SchedulingAlgorithm::RoundRobin { quantum: 1 });
        r.rows.push(ProcessRow::new(&Process::new("P1", 2), 0, 2));
        r.timeline.push(ExecutionSlice::new("P1", 0, 1));
        r.timeline.push(ExecutionSlice::new("P1", 1, 2));

        // Two dispatches of the same process: no switch in between
        let kpi = ScheduleKpi::calculate(&r);
        assert_eq!(kpi.dispatches, 2);
        assert_eq!(kpi.context_switches, 0);

        // P1, P1, P2, P1 → switches at P1→P2 and P2→P1
        r.rows.push(ProcessRow::new(&Process::new("P2", 1), 2, 3));
        r.timeline.push(ExecutionSlice::new("P2", 2, 3));
        r.timeline.push(ExecutionSlice::new("P1", 3, 4));
        let kpi = ScheduleKpi::calculate(&r);
        assert_eq!(kpi.dispatches, 4);
        assert_eq!(kpi.context_switches, 2);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&ScheduleResult::new(SchedulingAlgorithm::Sjf));
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
        assert!((kpi.avg_waiting_time - 0.0).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 0);
    }

    #[test]
    fn test_meets_thresholds() {
        let kpi = ScheduleKpi::calculate(&rr_result());
        assert!(kpi.meets_thresholds(2.0, 1.0));
        assert!(!kpi.meets_thresholds(1.9, 0.0));
        assert!(!kpi.meets_thresholds(10.0, 1.5));
    }
}
