//! Rule engine for multi-criteria process selection.
//!
//! Applies rules in sequence: the next rule is consulted only when every
//! previous rule scores two processes equally. A final tie-breaker makes
//! the order total.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::ProcessControlBlock;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Earlier position in the input list first (default).
    #[default]
    InputOrder,
    /// Deterministic by process ID (lexicographic).
    ByPid,
}

/// A composable rule engine for ready-set ordering.
///
/// # Example
/// ```
/// use u_procsim::dispatching::{RuleEngine, TieBreaker};
/// use u_procsim::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Spt)
///     .with_tie_breaker(rules::Fifo)
///     .with_final_tie_breaker(TieBreaker::InputOrder);
/// assert_eq!(engine.rule_names(), vec!["SPT", "FIFO"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
        }
    }

    /// Adds the primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts candidate processes (dispatch order first).
    ///
    /// `candidates` are indices into `pcbs`; the returned vector holds the
    /// same indices reordered.
    pub fn sort_candidates(
        &self,
        pcbs: &[ProcessControlBlock],
        candidates: &[usize],
        context: &DispatchContext,
    ) -> Vec<usize> {
        let mut sorted = candidates.to_vec();
        sorted.sort_by(|&a, &b| self.compare(pcbs, a, b, context));
        sorted
    }

    /// Returns the index of the process to dispatch next.
    pub fn select_best(
        &self,
        pcbs: &[ProcessControlBlock],
        candidates: &[usize],
        context: &DispatchContext,
    ) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.compare(pcbs, a, b, context))
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, pcb: &ProcessControlBlock, context: &DispatchContext) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(pcb, context)).collect()
    }

    fn compare(
        &self,
        pcbs: &[ProcessControlBlock],
        a: usize,
        b: usize,
        context: &DispatchContext,
    ) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(&pcbs[a], context);
            let score_b = rule.evaluate(&pcbs[b], context);

            match score_a.cmp(&score_b) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }

        match self.tie_breaker {
            TieBreaker::InputOrder => a.cmp(&b),
            TieBreaker::ByPid => pcbs[a].pid().cmp(pcbs[b].pid()).then(a.cmp(&b)),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
