//! CPU process scheduling simulator.
//!
//! Simulates a single CPU dispatching a set of processes under a chosen
//! policy, producing a Gantt-style timeline and per-process statistics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessSpec`, `ProcessControlBlock`,
//!   `Timeline`, `Slice`
//! - **`dispatching`**: Selection rules (FIFO, SPT, priority with aging) and
//!   the rule engine used by non-preemptive policies
//! - **`scheduler`**: `Simulator`, policies (FCFS, SJF, RR, HPF) and
//!   `ScheduleStats`
//! - **`validation`**: Input integrity checks (duplicate IDs, negative
//!   arrivals, non-positive bursts, bad quanta)
//! - **`workload`**: JSON workload files and seeded random workloads
//!
//! # Example
//!
//! ```
//! use u_procsim::models::ProcessSpec;
//! use u_procsim::scheduler::Simulator;
//!
//! let processes = vec![
//!     ProcessSpec::new("A", 5),
//!     ProcessSpec::new("B", 3).with_arrival(1),
//!     ProcessSpec::new("C", 1).with_arrival(2),
//! ];
//!
//! let outcome = Simulator::sjf().simulate(&processes)?;
//! assert_eq!(outcome.timeline.to_string(), "A:0-5, C:5-6, B:6-9");
//! # Ok::<(), u_procsim::SimError>(())
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` events (dispatches at `TRACE`, run summaries at
//! `DEBUG`, rejected input at `WARN`) and installs no subscriber.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{SimError, SimResult};
