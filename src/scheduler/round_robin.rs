//! Round-robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Admit every process with `arrival <= clock` to the tail of a FIFO
//!    ready queue, in arrival order.
//! 2. If the queue is empty, jump the clock to the next arrival.
//! 3. Dequeue the head and run it for `min(quantum, remaining)`.
//! 4. Admit arrivals up to the new clock **before** re-appending the
//!    preempted process, which counts as arriving at that same instant.
//!
//! The preempted process's requeue time is kept in `ready_at`; its original
//! arrival is never touched.

use std::collections::VecDeque;

use super::{arrival_order, run_slice};
use crate::models::{ProcessControlBlock, Timeline};

/// Dispatches processes in time slices of at most `quantum` units.
///
/// `quantum` must be positive; the simulator validates it beforehand.
pub(crate) fn run(pcbs: &mut [ProcessControlBlock], quantum: i64) -> Timeline {
    debug_assert!(quantum > 0, "round-robin quantum must be positive");

    let mut backlog: VecDeque<usize> = arrival_order(pcbs).into();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut timeline = Timeline::new();
    let mut clock = 0;

    loop {
        admit_arrivals(pcbs, &mut backlog, &mut queue, clock);

        let Some(idx) = queue.pop_front() else {
            match backlog.front() {
                Some(&next) => {
                    clock = pcbs[next].arrival();
                    continue;
                }
                None => break,
            }
        };

        let pcb = &mut pcbs[idx];
        clock = clock.max(pcb.ready_at());
        clock = run_slice(pcb, clock, quantum, &mut timeline);

        if !pcbs[idx].is_complete() {
            admit_arrivals(pcbs, &mut backlog, &mut queue, clock);
            pcbs[idx].requeue(clock);
            queue.push_back(idx);
        }
    }

    timeline
}

fn admit_arrivals(
    pcbs: &[ProcessControlBlock],
    backlog: &mut VecDeque<usize>,
    queue: &mut VecDeque<usize>,
    clock: i64,
) {
    while let Some(&next) = backlog.front() {
        if pcbs[next].arrival() > clock {
            break;
        }
        queue.push_back(next);
        backlog.pop_front();
    }
}
