//! CPU scheduling simulation.
//!
//! Runs a list of processes under a dispatch policy and derives statistics.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | no | earliest arrival |
//! | SJF | no | smallest burst among arrived |
//! | RR | yes | FIFO queue, fixed quantum |
//! | HPF | no | highest (aged) priority among arrived |
//!
//! # Invariants
//!
//! For every policy the timeline slices never overlap, their total length
//! equals the sum of all bursts, and no slice starts before its process
//! arrives.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod fcfs;
mod policy;
mod round_robin;
mod selective;
mod stats;

pub use policy::{Aging, Policy, DEFAULT_QUANTUM};
pub use stats::{ProcessStats, ScheduleStats};

use serde::Serialize;

use crate::dispatching::{rules, RuleEngine};
use crate::error::{SimError, SimResult};
use crate::models::{ProcessControlBlock, ProcessSpec, Slice, Timeline};
use crate::validation::validate_input;

/// Input container for a simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationRequest {
    /// Processes to schedule, in input order.
    pub processes: Vec<ProcessSpec>,
    /// Dispatch policy.
    pub policy: Policy,
}

impl SimulationRequest {
    /// Creates a new simulation request.
    pub fn new(processes: Vec<ProcessSpec>, policy: Policy) -> Self {
        Self { processes, policy }
    }

    /// Adds a process.
    pub fn with_process(mut self, process: ProcessSpec) -> Self {
        self.processes.push(process);
        self
    }
}

/// Result of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationOutcome {
    /// Policy that produced this outcome.
    pub policy: Policy,
    /// CPU allocations in dispatch order.
    pub timeline: Timeline,
    /// Completed PCBs, in input order.
    pub processes: Vec<ProcessControlBlock>,
    /// Derived statistics.
    pub stats: ScheduleStats,
}

impl SimulationOutcome {
    /// Completed PCB for a given process.
    pub fn process(&self, pid: &str) -> Option<&ProcessControlBlock> {
        self.processes.iter().find(|p| p.pid() == pid)
    }
}

/// CPU scheduling simulator.
///
/// # Example
///
/// ```
/// use u_procsim::models::ProcessSpec;
/// use u_procsim::scheduler::Simulator;
///
/// let processes = vec![
///     ProcessSpec::new("P1", 5),
///     ProcessSpec::new("P2", 3).with_arrival(1),
/// ];
///
/// let outcome = Simulator::round_robin(2).simulate(&processes).unwrap();
/// assert_eq!(
///     outcome.timeline.to_string(),
///     "P1:0-2, P2:2-4, P1:4-6, P2:6-7, P1:7-8"
/// );
/// assert_eq!(outcome.stats.process("P2").unwrap().turnaround, 6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Simulator {
    policy: Policy,
}

impl Simulator {
    /// Creates a simulator for the given policy.
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    /// First-Come-First-Served.
    pub fn fcfs() -> Self {
        Self::new(Policy::Fcfs)
    }

    /// Shortest-Job-First.
    pub fn sjf() -> Self {
        Self::new(Policy::Sjf)
    }

    /// Round-robin with the given quantum.
    pub fn round_robin(quantum: i64) -> Self {
        Self::new(Policy::RoundRobin { quantum })
    }

    /// Highest-Priority-First without aging.
    pub fn priority() -> Self {
        Self::new(Policy::priority())
    }

    /// Highest-Priority-First with aging.
    pub fn priority_with_aging(aging: Aging) -> Self {
        Self::new(Policy::Priority { aging: Some(aging) })
    }

    /// Configured policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Simulates the processes under the configured policy.
    ///
    /// # Algorithm
    /// 1. Validate policy parameters and processes (all errors collected).
    /// 2. Build one PCB per process.
    /// 3. Dispatch under the policy, recording the timeline.
    /// 4. Derive statistics from the completed PCBs.
    ///
    /// Empty input is not an error: it yields an empty timeline and zeroed
    /// statistics.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(policy = %self.policy, processes = processes.len())
    )]
    pub fn simulate(&self, processes: &[ProcessSpec]) -> SimResult<SimulationOutcome> {
        if let Err(errors) = validate_input(processes, &self.policy) {
            tracing::warn!(errors = errors.len(), "rejecting invalid simulation input");
            return Err(SimError::InvalidInput(errors));
        }

        let mut pcbs: Vec<ProcessControlBlock> =
            processes.iter().map(ProcessControlBlock::from_spec).collect();

        let timeline = match self.policy {
            Policy::Fcfs => fcfs::run(&mut pcbs),
            Policy::RoundRobin { quantum } => round_robin::run(&mut pcbs, quantum),
            Policy::Sjf | Policy::Priority { .. } => {
                let engine = self.rule_engine();
                selective::run(&mut pcbs, &engine)
            }
        };

        let stats = ScheduleStats::calculate(&pcbs, &timeline);
        tracing::debug!(
            makespan = stats.makespan,
            dispatches = stats.dispatches,
            avg_turnaround = stats.avg_turnaround,
            avg_waiting = stats.avg_waiting,
            "simulation complete"
        );

        Ok(SimulationOutcome {
            policy: self.policy,
            timeline,
            processes: pcbs,
            stats,
        })
    }

    /// Simulates from a request, using the request's policy.
    pub fn simulate_request(request: &SimulationRequest) -> SimResult<SimulationOutcome> {
        Self::new(request.policy).simulate(&request.processes)
    }

    /// Selection rules for the non-preemptive policies.
    fn rule_engine(&self) -> RuleEngine {
        match self.policy {
            Policy::Sjf => RuleEngine::new()
                .with_rule(rules::Spt)
                .with_tie_breaker(rules::Fifo),
            Policy::Priority { aging } => RuleEngine::new()
                .with_rule(rules::HighestPriority { aging })
                .with_tie_breaker(rules::Fifo),
            Policy::Fcfs | Policy::RoundRobin { .. } => RuleEngine::new().with_rule(rules::Fifo),
        }
    }
}

/// Runs `pcb` for up to `max_units` from `clock`, records the slice, and
/// returns the clock after the slice.
fn run_slice(
    pcb: &mut ProcessControlBlock,
    clock: i64,
    max_units: i64,
    timeline: &mut Timeline,
) -> i64 {
    let ran = pcb.execute(clock, max_units);
    let end = clock + ran;
    tracing::trace!(pid = pcb.pid(), start = clock, end, remaining = pcb.remaining(), "dispatch");
    timeline.push(Slice::new(pcb.pid(), clock, end));
    end
}

/// Indices of `pcbs` sorted by arrival; equal arrivals keep input order.
fn arrival_order(pcbs: &[ProcessControlBlock]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..pcbs.len()).collect();
    order.sort_by_key(|&idx| pcbs[idx].arrival());
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn sample_processes() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new("A", 5),
            ProcessSpec::new("B", 3).with_arrival(1),
            ProcessSpec::new("C", 1).with_arrival(2),
        ]
    }

    #[test]
    fn test_each_policy_dispatches() {
        let processes = sample_processes();

        let fcfs = Simulator::fcfs().simulate(&processes).unwrap();
        assert_eq!(fcfs.timeline.to_string(), "A:0-5, B:5-8, C:8-9");

        let sjf = Simulator::sjf().simulate(&processes).unwrap();
        assert_eq!(sjf.timeline.to_string(), "A:0-5, C:5-6, B:6-9");

        let rr = Simulator::round_robin(2).simulate(&processes).unwrap();
        assert_eq!(
            rr.timeline.to_string(),
            "A:0-2, B:2-4, C:4-5, A:5-7, B:7-8, A:8-9"
        );

        let hpf = Simulator::priority().simulate(&processes).unwrap();
        // All priorities equal → arrival order
        assert_eq!(hpf.timeline.to_string(), fcfs.timeline.to_string());
    }

    #[test]
    fn test_outcome_contents() {
        let outcome = Simulator::sjf().simulate(&sample_processes()).unwrap();

        assert_eq!(outcome.policy, Policy::Sjf);
        assert_eq!(outcome.processes.len(), 3);
        assert_eq!(outcome.processes[1].pid(), "B");
        assert_eq!(outcome.process("C").unwrap().finish(), Some(6));
        assert_eq!(outcome.stats.process("B").unwrap().waiting, 5);
        assert!(outcome.processes.iter().all(|p| p.remaining() == 0));
    }

    #[test]
    fn test_empty_input() {
        let outcome = Simulator::round_robin(2).simulate(&[]).unwrap();
        assert!(outcome.timeline.is_empty());
        assert!(outcome.processes.is_empty());
        assert_eq!(outcome.stats, ScheduleStats::default());
    }

    #[test]
    fn test_invalid_input_rejected() {
        let processes = vec![ProcessSpec::new("P1", 0)];
        let err = Simulator::fcfs().simulate(&processes).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::NonPositiveBurst
        );
    }

    #[test]
    fn test_invalid_quantum_rejected() {
        let err = Simulator::round_robin(0)
            .simulate(&sample_processes())
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidInput(_)));
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::InvalidQuantum
        );
    }

    #[test]
    fn test_clock_overflow_rejected() {
        let processes = vec![ProcessSpec::new("P1", 5).with_arrival(i64::MAX - 1)];
        for simulator in [Simulator::fcfs(), Simulator::sjf(), Simulator::round_robin(2)] {
            let err = simulator.simulate(&processes).unwrap_err();
            assert_eq!(
                err.validation_errors()[0].kind,
                ValidationErrorKind::TimeOverflow
            );
        }
    }

    #[test]
    fn test_schedule_ending_near_clock_limit() {
        let processes = vec![
            ProcessSpec::new("late", 1).with_arrival(i64::MAX - 3),
            ProcessSpec::new("early", 2),
        ];

        let outcome = Simulator::round_robin(1).simulate(&processes).unwrap();
        assert_eq!(outcome.stats.makespan, i64::MAX - 2);
        assert_eq!(outcome.stats.busy_time, 3);
        assert_eq!(outcome.process("late").unwrap().finish(), Some(i64::MAX - 2));
    }

    #[test]
    fn test_simulate_request() {
        let request = SimulationRequest::new(Vec::new(), Policy::Sjf)
            .with_process(ProcessSpec::new("P1", 2).with_arrival(5));

        let outcome = Simulator::simulate_request(&request).unwrap();
        assert_eq!(outcome.timeline.to_string(), "P1:5-7");
    }

    #[test]
    fn test_priority_with_aging() {
        let processes = vec![
            ProcessSpec::new("long", 10).with_priority(3),
            ProcessSpec::new("high", 1).with_arrival(5).with_priority(2),
            ProcessSpec::new("low", 1).with_arrival(1).with_priority(0),
        ];

        let plain = Simulator::priority().simulate(&processes).unwrap();
        assert_eq!(plain.timeline.to_string(), "long:0-10, high:10-11, low:11-12");

        // At t=10 low has aged to 0 + 9 = 9, high only to 2 + 5 = 7
        let aged = Simulator::priority_with_aging(Aging::new(1, 1, 20))
            .simulate(&processes)
            .unwrap();
        assert_eq!(aged.timeline.to_string(), "long:0-10, low:10-11, high:11-12");
    }

    #[test]
    fn test_arrival_order_is_stable() {
        let pcbs: Vec<ProcessControlBlock> = [("A", 3), ("B", 1), ("C", 1)]
            .iter()
            .map(|&(pid, arrival)| {
                ProcessControlBlock::from_spec(&ProcessSpec::new(pid, 1).with_arrival(arrival))
            })
            .collect();
        assert_eq!(arrival_order(&pcbs), vec![1, 2, 0]);
    }

    #[test]
    fn test_fcfs_is_deterministic() {
        let processes = sample_processes();
        let first = Simulator::fcfs().simulate(&processes).unwrap();
        let second = Simulator::fcfs().simulate(&processes).unwrap();
        assert_eq!(first, second);
    }
}
