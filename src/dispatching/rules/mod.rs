//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::ProcessControlBlock;
use crate::scheduler::Aging;

/// First In First Out.
///
/// Prioritizes processes by the time they entered the ready set. For
/// non-preemptive policies that is the original arrival.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, pcb: &ProcessControlBlock, _context: &DispatchContext) -> RuleScore {
        pcb.ready_at()
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

/// Shortest Processing Time (shortest job first).
///
/// Prioritizes processes with the smaller total burst. Minimizes mean
/// waiting time among non-preemptive policies when all jobs are ready.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, pcb: &ProcessControlBlock, _context: &DispatchContext) -> RuleScore {
        pcb.burst()
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Highest priority first, with optional aging.
///
/// Larger priority values win. With aging configured, the effective priority
/// grows with the time spent in the ready set so low-priority processes are
/// not starved indefinitely.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestPriority {
    /// Aging rule; `None` uses the base priority.
    pub aging: Option<Aging>,
}

impl HighestPriority {
    /// Creates the rule with aging.
    pub fn with_aging(aging: Aging) -> Self {
        Self { aging: Some(aging) }
    }

    /// Effective priority of a process at the context's clock.
    pub fn effective_priority(&self, pcb: &ProcessControlBlock, context: &DispatchContext) -> i32 {
        match &self.aging {
            Some(aging) => aging.effective_priority(pcb.priority(), context.waited(pcb)),
            None => pcb.priority(),
        }
    }
}

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, pcb: &ProcessControlBlock, context: &DispatchContext) -> RuleScore {
        -i64::from(self.effective_priority(pcb, context))
    }

    fn description(&self) -> &'static str {
        "Highest Priority First"
    }
}
