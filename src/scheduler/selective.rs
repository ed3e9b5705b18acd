//! Non-preemptive dynamic selection (SJF, priority).
//!
//! # Algorithm
//!
//! The processes are split into a backlog (not yet arrived, sorted by
//! arrival) and a ready set. At every decision point:
//!
//! 1. Admit every backlog entry with `arrival <= clock`.
//! 2. If nothing is ready, jump the clock to the next arrival and retry.
//! 3. Otherwise pick the best ready process with the rule engine and run it
//!    to completion.
//!
//! A process can never be selected before its arrival because it is not in
//! the ready set until then.
//!
//! # Complexity
//! O(n^2 * r) where r = number of rules in the engine.

use std::collections::VecDeque;

use super::{arrival_order, run_slice};
use crate::dispatching::{DispatchContext, RuleEngine};
use crate::models::{ProcessControlBlock, Timeline};

/// Dispatches processes one at a time, choosing among the ready set with
/// `engine`.
pub(crate) fn run(pcbs: &mut [ProcessControlBlock], engine: &RuleEngine) -> Timeline {
    let mut backlog: VecDeque<usize> = arrival_order(pcbs).into();
    let mut ready: Vec<usize> = Vec::new();
    let mut timeline = Timeline::new();
    let mut clock = 0;

    loop {
        while let Some(&next) = backlog.front() {
            if pcbs[next].arrival() > clock {
                break;
            }
            ready.push(next);
            backlog.pop_front();
        }

        if ready.is_empty() {
            match backlog.front() {
                Some(&next) => {
                    clock = pcbs[next].arrival();
                    continue;
                }
                None => break,
            }
        }

        let context = DispatchContext::at_time(clock);
        let Some(chosen) = engine.select_best(pcbs, &ready, &context) else {
            break;
        };
        ready.retain(|&idx| idx != chosen);

        let pcb = &mut pcbs[chosen];
        let burst = pcb.remaining();
        clock = run_slice(pcb, clock, burst, &mut timeline);
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::ProcessSpec;
    use crate::scheduler::Aging;

    fn make_pcbs(specs: &[(&str, i64, i64, i32)]) -> Vec<ProcessControlBlock> {
        specs
            .iter()
            .map(|&(pid, arrival, burst, priority)| {
                ProcessControlBlock::from_spec(
                    &ProcessSpec::new(pid, burst)
                        .with_arrival(arrival)
                        .with_priority(priority),
                )
            })
            .collect()
    }

    fn sjf() -> RuleEngine {
        RuleEngine::new()
            .with_rule(rules::Spt)
            .with_tie_breaker(rules::Fifo)
    }

    #[test]
    fn test_sjf_non_preemptive_order() {
        let mut pcbs = make_pcbs(&[("A", 0, 5, 0), ("B", 1, 3, 0), ("C", 2, 1, 0)]);
        let timeline = run(&mut pcbs, &sjf());
        assert_eq!(timeline.to_string(), "A:0-5, C:5-6, B:6-9");
    }

    #[test]
    fn test_sjf_waits_for_arrival() {
        // The shortest job has not arrived when the CPU frees up
        let mut pcbs = make_pcbs(&[("A", 0, 2, 0), ("B", 1, 4, 0), ("C", 3, 1, 0)]);
        let timeline = run(&mut pcbs, &sjf());
        assert_eq!(timeline.to_string(), "A:0-2, B:2-6, C:6-7");
    }

    #[test]
    fn test_sjf_idle_until_next_arrival() {
        let mut pcbs = make_pcbs(&[("A", 4, 3, 0), ("B", 4, 1, 0)]);
        let timeline = run(&mut pcbs, &sjf());
        assert_eq!(timeline.to_string(), "B:4-5, A:5-8");
    }

    #[test]
    fn test_sjf_tie_breaks_by_arrival_then_input() {
        let mut pcbs = make_pcbs(&[
            ("X", 0, 6, 0),
            ("late", 3, 2, 0),
            ("early", 1, 2, 0),
            ("twin", 1, 2, 0),
        ]);
        let timeline = run(&mut pcbs, &sjf());
        assert_eq!(timeline.to_string(), "X:0-6, early:6-8, twin:8-10, late:10-12");
    }

    #[test]
    fn test_priority_selection() {
        let engine = RuleEngine::new()
            .with_rule(rules::HighestPriority::default())
            .with_tie_breaker(rules::Fifo);
        let mut pcbs = make_pcbs(&[("A", 0, 3, 1), ("B", 1, 2, 2), ("C", 1, 2, 5)]);
        let timeline = run(&mut pcbs, &engine);
        assert_eq!(timeline.to_string(), "A:0-3, C:3-5, B:5-7");
    }

    #[test]
    fn test_priority_aging_prevents_starvation() {
        // A steady stream of priority-5 jobs would starve "low" without aging
        let names: Vec<String> = (1..6).map(|i| format!("H{i}")).collect();
        let mut specs = vec![("low", 0, 2, 0), ("H0", 0, 3, 5)];
        for (i, name) in names.iter().enumerate() {
            specs.push((name.as_str(), 3 * (i as i64 + 1), 3, 5));
        }

        let plain = RuleEngine::new()
            .with_rule(rules::HighestPriority::default())
            .with_tie_breaker(rules::Fifo);
        let mut pcbs = make_pcbs(&specs);
        let timeline = run(&mut pcbs, &plain);
        assert_eq!(timeline.slices().last().unwrap().pid, "low");

        let aged = RuleEngine::new()
            .with_rule(rules::HighestPriority::with_aging(Aging::new(2, 1, 10)))
            .with_tie_breaker(rules::Fifo);
        let mut pcbs = make_pcbs(&specs);
        let timeline = run(&mut pcbs, &aged);
        assert_ne!(timeline.slices().last().unwrap().pid, "low");
        // low reaches 4 by t=9 (still below 5) and 6 by t=12
        assert_eq!(timeline.first_start("low"), Some(12));
    }
}
