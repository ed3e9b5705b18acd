//! Scheduling performance statistics.
//!
//! Computes standard CPU-scheduling metrics from the completed PCBs and the
//! timeline of a simulation run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | finish - arrival |
//! | Waiting | turnaround - burst |
//! | Weighted turnaround | turnaround / burst |
//! | Response | first start - arrival |
//! | CPU utilization | busy time / makespan |
//! | Throughput | completed processes / makespan |
//!
//! Turnaround always uses the original arrival, never the round-robin
//! requeue time.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::Serialize;

use crate::models::{ProcessControlBlock, Timeline};

/// Per-process metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessStats {
    /// Process identifier.
    pub pid: String,
    /// Original arrival time.
    pub arrival: i64,
    /// Total service time.
    pub burst: i64,
    /// First dispatch time.
    pub start: i64,
    /// Completion time.
    pub finish: i64,
    /// finish - arrival.
    pub turnaround: i64,
    /// turnaround - burst.
    pub waiting: i64,
    /// start - arrival.
    pub response: i64,
    /// turnaround / burst.
    pub weighted_turnaround: f64,
}

impl ProcessStats {
    /// Derives metrics for a completed process. Returns `None` if the
    /// process never started or never finished.
    pub fn from_pcb(pcb: &ProcessControlBlock) -> Option<Self> {
        let start = pcb.start()?;
        let finish = pcb.finish()?;
        let turnaround = finish - pcb.arrival();

        Some(Self {
            pid: pcb.pid().to_string(),
            arrival: pcb.arrival(),
            burst: pcb.burst(),
            start,
            finish,
            turnaround,
            waiting: turnaround - pcb.burst(),
            response: start - pcb.arrival(),
            weighted_turnaround: turnaround as f64 / pcb.burst() as f64,
        })
    }
}

/// Aggregate statistics for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScheduleStats {
    /// Per-process metrics, in input order.
    pub processes: Vec<ProcessStats>,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean weighted turnaround.
    pub avg_weighted_turnaround: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Total CPU time allocated.
    pub busy_time: i64,
    /// CPU idle time within `[0, makespan)`.
    pub idle_time: i64,
    /// busy_time / makespan (0.0 when nothing ran).
    pub cpu_utilization: f64,
    /// Completed processes per time unit of makespan.
    pub throughput: f64,
    /// Number of timeline entries.
    pub dispatches: usize,
}

impl ScheduleStats {
    /// Computes statistics from completed PCBs and their timeline.
    pub fn calculate(pcbs: &[ProcessControlBlock], timeline: &Timeline) -> Self {
        let processes: Vec<ProcessStats> = pcbs.iter().filter_map(ProcessStats::from_pcb).collect();

        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();
        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                busy_time as f64 / makespan as f64,
                processes.len() as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            avg_turnaround: mean(processes.iter().map(|p| p.turnaround as f64)),
            avg_waiting: mean(processes.iter().map(|p| p.waiting as f64)),
            avg_weighted_turnaround: mean(processes.iter().map(|p| p.weighted_turnaround)),
            avg_response: mean(processes.iter().map(|p| p.response as f64)),
            processes,
            makespan,
            busy_time,
            idle_time: timeline.idle_time(),
            cpu_utilization,
            throughput,
            dispatches: timeline.len(),
        }
    }

    /// Metrics for a given process.
    pub fn process(&self, pid: &str) -> Option<&ProcessStats> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Number of completed processes.
    pub fn completed(&self) -> usize {
        self.processes.len()
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProcessSpec, Slice};

    fn completed(pid: &str, arrival: i64, burst: i64, start: i64) -> ProcessControlBlock {
        let mut pcb =
            ProcessControlBlock::from_spec(&ProcessSpec::new(pid, burst).with_arrival(arrival));
        pcb.execute(start, burst);
        pcb
    }

    #[test]
    fn test_stats_basic() {
        // A:0-5, C:5-6, B:6-9
        let pcbs = vec![
            completed("A", 0, 5, 0),
            completed("B", 1, 3, 6),
            completed("C", 2, 1, 5),
        ];
        let timeline: Timeline = vec![
            Slice::new("A", 0, 5),
            Slice::new("C", 5, 6),
            Slice::new("B", 6, 9),
        ]
        .into_iter()
        .collect();

        let stats = ScheduleStats::calculate(&pcbs, &timeline);

        let b = stats.process("B").unwrap();
        assert_eq!(b.turnaround, 8);
        assert_eq!(b.waiting, 5);
        assert_eq!(b.response, 5);
        assert!((b.weighted_turnaround - 8.0 / 3.0).abs() < 1e-10);

        // Turnarounds 5, 8, 4 → 17/3; waits 0, 5, 3 → 8/3
        assert!((stats.avg_turnaround - 17.0 / 3.0).abs() < 1e-10);
        assert!((stats.avg_waiting - 8.0 / 3.0).abs() < 1e-10);
        assert!((stats.avg_weighted_turnaround - (1.0 + 8.0 / 3.0 + 4.0) / 3.0).abs() < 1e-10);
        assert_eq!(stats.makespan, 9);
        assert_eq!(stats.busy_time, 9);
        assert_eq!(stats.idle_time, 0);
        assert!((stats.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((stats.throughput - 3.0 / 9.0).abs() < 1e-10);
        assert_eq!(stats.dispatches, 3);
        assert_eq!(stats.completed(), 3);
    }

    #[test]
    fn test_stats_use_original_arrival() {
        let mut pcb = ProcessControlBlock::from_spec(&ProcessSpec::new("P1", 4).with_arrival(1));
        pcb.execute(1, 2);
        pcb.requeue(3);
        pcb.execute(5, 2);

        let stats = ProcessStats::from_pcb(&pcb).unwrap();
        assert_eq!(stats.finish, 7);
        assert_eq!(stats.turnaround, 6);
        assert_eq!(stats.waiting, 2);
    }

    #[test]
    fn test_stats_idle_time() {
        let pcbs = vec![completed("P1", 5, 2, 5)];
        let timeline: Timeline = vec![Slice::new("P1", 5, 7)].into_iter().collect();

        let stats = ScheduleStats::calculate(&pcbs, &timeline);
        assert_eq!(stats.idle_time, 5);
        assert!((stats.cpu_utilization - 2.0 / 7.0).abs() < 1e-10);
        assert_eq!(stats.process("P1").unwrap().waiting, 0);
    }

    #[test]
    fn test_stats_skip_unfinished() {
        let pending = ProcessControlBlock::from_spec(&ProcessSpec::new("P1", 3));
        assert!(ProcessStats::from_pcb(&pending).is_none());
    }

    #[test]
    fn test_stats_empty() {
        let stats = ScheduleStats::calculate(&[], &Timeline::new());
        assert!(stats.processes.is_empty());
        assert_eq!(stats.makespan, 0);
        assert!((stats.avg_turnaround - 0.0).abs() < 1e-10);
        assert!((stats.cpu_utilization - 0.0).abs() < 1e-10);
        assert_eq!(stats, ScheduleStats::default());
    }
}
