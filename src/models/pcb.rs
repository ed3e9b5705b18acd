//! Process Control Block (runtime state of one process).
//!
//! A PCB is built from a [`ProcessSpec`] at the start of a simulation and is
//! mutated only by the dispatch policies. Identity and timing inputs are
//! immutable; execution progress is tracked in `remaining`, `start` and
//! `finish`.
//!
//! # Arrival vs. ready time
//!
//! Preemptive policies need to know when a process last (re)entered the
//! ready queue. That value is kept in `ready_at`, separate from the original
//! `arrival`, so statistics always use the true arrival.

use serde::Serialize;

use super::ProcessSpec;

/// Runtime record of one schedulable unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessControlBlock {
    pid: String,
    arrival: i64,
    burst: i64,
    priority: i32,
    remaining: i64,
    start: Option<i64>,
    finish: Option<i64>,
    #[serde(skip)]
    ready_at: i64,
}

impl ProcessControlBlock {
    /// Creates a fresh PCB: nothing executed, not yet dispatched.
    pub fn from_spec(spec: &ProcessSpec) -> Self {
        Self {
            pid: spec.pid.clone(),
            arrival: spec.arrival,
            burst: spec.burst,
            priority: spec.priority,
            remaining: spec.burst,
            start: None,
            finish: None,
            ready_at: spec.arrival,
        }
    }

    /// Process identifier.
    pub fn pid(&self) -> &str {
        &self.pid
    }

    /// Original arrival time.
    pub fn arrival(&self) -> i64 {
        self.arrival
    }

    /// Total required service time.
    pub fn burst(&self) -> i64 {
        self.burst
    }

    /// Base scheduling priority.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Service time not yet delivered.
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Time of first dispatch.
    pub fn start(&self) -> Option<i64> {
        self.start
    }

    /// Time of completion.
    pub fn finish(&self) -> Option<i64> {
        self.finish
    }

    /// Time the process last entered the ready queue.
    pub fn ready_at(&self) -> i64 {
        self.ready_at
    }

    /// Whether all service time has been delivered.
    pub fn is_complete(&self) -> bool {
        self.finish.is_some()
    }

    /// Runs the process for up to `max_units` starting at `clock`.
    ///
    /// Records the first dispatch, decrements `remaining`, and sets `finish`
    /// when the process completes. Returns the units actually consumed.
    pub(crate) fn execute(&mut self, clock: i64, max_units: i64) -> i64 {
        debug_assert!(!self.is_complete(), "dispatching a completed process");
        if self.start.is_none() {
            self.start = Some(clock);
        }
        let ran = max_units.min(self.remaining);
        self.remaining -= ran;
        if self.remaining == 0 {
            self.finish = Some(clock + ran);
        }
        ran
    }

    /// Marks the process as re-entering the ready queue at `clock`.
    pub(crate) fn requeue(&mut self, clock: i64) {
        self.ready_at = clock;
    }
}
