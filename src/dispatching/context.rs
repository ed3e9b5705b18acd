//! Dispatch context for rule evaluation.

use crate::models::ProcessControlBlock;

/// Simulation state visible to dispatching rules at a decision point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchContext {
    /// Current simulation clock.
    pub clock: i64,
}

impl DispatchContext {
    /// Creates a context at the given time.
    pub fn at_time(clock: i64) -> Self {
        Self { clock }
    }

    /// How long a process has been waiting in the ready set.
    pub fn waited(&self, pcb: &ProcessControlBlock) -> i64 {
        (self.clock - pcb.ready_at()).max(0)
    }
}
