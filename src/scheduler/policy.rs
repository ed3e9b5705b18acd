//! Dispatch policy configuration.
//!
//! Policies are plain data so they can be embedded in workload files:
//!
//! ```json
//! {"kind": "round_robin", "quantum": 4}
//! {"kind": "priority", "aging": {"interval": 5, "step": 1, "ceiling": 10}}
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimError;

/// Default round-robin time quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

/// CPU dispatch policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served (non-preemptive).
    #[default]
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Round-robin with a fixed time quantum (preemptive).
    RoundRobin {
        /// Maximum units a process runs per dispatch.
        #[serde(default = "default_quantum")]
        quantum: i64,
    },
    /// Highest-Priority-First (non-preemptive) with optional aging.
    Priority {
        /// Starvation protection. `None` disables aging.
        #[serde(default)]
        aging: Option<Aging>,
    },
}

impl Policy {
    /// Round-robin with [`DEFAULT_QUANTUM`].
    pub fn round_robin() -> Self {
        Self::RoundRobin {
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// Priority scheduling without aging.
    pub fn priority() -> Self {
        Self::Priority { aging: None }
    }

    /// Whether a running process can lose the CPU before completing.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. })
    }

    /// Short policy label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::RoundRobin { .. } => "RR",
            Self::Priority { .. } => "HPF",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
            other => f.write_str(other.as_str()),
        }
    }
}

impl FromStr for Policy {
    type Err = SimError;

    /// Parses a policy name with default parameters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" | "spn" => Ok(Self::Sjf),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::round_robin()),
            "hpf" | "priority" | "prio" => Ok(Self::priority()),
            _ => Err(SimError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Priority aging rule.
///
/// Every `interval` time units spent waiting raise the effective priority by
/// `step`, never beyond `ceiling` (and never below the base priority).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aging {
    /// Waiting time per boost. Must be positive.
    pub interval: i64,
    /// Priority increase per boost. Must be positive.
    pub step: i32,
    /// Highest effective priority reachable through aging.
    pub ceiling: i32,
}

impl Aging {
    /// Creates an aging rule.
    pub fn new(interval: i64, step: i32, ceiling: i32) -> Self {
        Self {
            interval,
            step,
            ceiling,
        }
    }

    /// Effective priority after waiting `waited` time units.
    pub fn effective_priority(&self, base: i32, waited: i64) -> i32 {
        if waited <= 0 || self.interval <= 0 || self.step <= 0 {
            return base;
        }
        let boosts = waited / self.interval;
        let boosted = i64::from(base).saturating_add(boosts.saturating_mul(i64::from(self.step)));
        let cap = i64::from(self.ceiling.max(base));
        // boosted >= base and cap fits in i32, so the result fits too
        boosted.min(cap) as i32
    }
}
