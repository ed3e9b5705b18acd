//! Process descriptor model.
//!
//! A process spec is the immutable input record describing one schedulable
//! unit: when it becomes ready, how much CPU it needs, and how important it is.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integral time units relative to the simulation epoch (t=0).
/// Values are signed so that malformed input can be reported by validation
/// instead of failing at deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub pid: String,
    /// Time the process becomes ready.
    pub arrival: i64,
    /// Total CPU service time required.
    pub burst: i64,
    /// Scheduling priority (higher = more important). Only read by the
    /// priority policy.
    #[serde(default)]
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a process arriving at t=0 with the given burst.
    pub fn new(pid: impl Into<String>, burst: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival: 0,
            burst,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival: i64) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Earliest possible completion time (`arrival + burst`), saturating at
    /// `i64::MAX`.
    #[inline]
    pub fn earliest_finish(&self) -> i64 {
        self.arrival.saturating_add(self.burst)
    }
}
