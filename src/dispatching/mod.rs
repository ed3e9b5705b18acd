//! Dispatching rules and rule engine for process selection.
//!
//! Non-preemptive policies pick the next process from the ready set by
//! evaluating a chain of rules. FCFS, SJF and priority scheduling differ only
//! in the chain:
//!
//! | Policy | Primary rule | Tie-breakers |
//! |--------|--------------|--------------|
//! | FCFS | `Fifo` | input order |
//! | SJF | `Spt` | `Fifo`, input order |
//! | HPF | `HighestPriority` | `Fifo`, input order |
//!
//! # Usage
//!
//! ```
//! use u_procsim::dispatching::{DispatchContext, RuleEngine};
//! use u_procsim::dispatching::rules;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Spt)
//!     .with_tie_breaker(rules::Fifo);
//!
//! let context = DispatchContext::at_time(0);
//! // let next = engine.select_best(&pcbs, &ready, &context);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod context;
mod engine;
pub mod rules;

pub use context::DispatchContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::ProcessControlBlock;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Scores are compared
/// exactly, so every burst and arrival keeps a distinct key.
pub type RuleScore = i64;

/// A dispatching rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = dispatched first.** Rules favouring large values (such as
/// priority) negate them.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates a ready process at the current clock.
    fn evaluate(&self, pcb: &ProcessControlBlock, context: &DispatchContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
