//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Sort all processes by arrival (ties keep input order).
//! 2. For each process, advance the clock to `max(clock, arrival)`.
//! 3. Run it to completion.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the dispatch loop.

use super::run_slice;
use crate::dispatching::{rules, DispatchContext, RuleEngine};
use crate::models::{ProcessControlBlock, Timeline};

/// Dispatches every process in arrival order.
pub(crate) fn run(pcbs: &mut [ProcessControlBlock]) -> Timeline {
    let engine = RuleEngine::new().with_rule(rules::Fifo);
    let all: Vec<usize> = (0..pcbs.len()).collect();
    let order = engine.sort_candidates(pcbs, &all, &DispatchContext::at_time(0));

    let mut timeline = Timeline::new();
    let mut clock = 0;

    for idx in order {
        let pcb = &mut pcbs[idx];
        clock = clock.max(pcb.arrival());
        let burst = pcb.remaining();
        clock = run_slice(pcb, clock, burst, &mut timeline);
    }

    timeline
}
