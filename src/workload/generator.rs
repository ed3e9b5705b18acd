//! Random workload generation.
//!
//! Produces reproducible process sets for experiments and property tests.
//! The same seed and settings always yield the same processes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::ProcessSpec;

/// Generator for random, valid process lists.
///
/// All ranges are inclusive. Bursts are at least 1 and arrivals at least 0,
/// so generated processes always pass validation.
///
/// # Example
///
/// ```
/// use u_procsim::workload::WorkloadGenerator;
///
/// let generator = WorkloadGenerator::new(8).with_burst_range(1, 4);
/// let a = generator.generate_seeded(42);
/// let b = generator.generate_seeded(42);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    count: usize,
    max_arrival: i64,
    burst_range: (i64, i64),
    priority_range: (i32, i32),
    pid_prefix: String,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges
    /// (arrival 0..=10, burst 1..=10, priority 0..=5).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            burst_range: (1, 10),
            priority_range: (0, 5),
            pid_prefix: "P".to_string(),
        }
    }

    /// Sets the latest possible arrival (negative values become 0).
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the burst range. Bounds are ordered and raised to at least 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.burst_range = (lo.max(1), hi.max(1));
        self
    }

    /// Sets the priority range. Bounds are ordered.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = if min <= max { (min, max) } else { (max, min) };
        self
    }

    /// Sets the pid prefix (`P` gives `P1`, `P2`, ...).
    pub fn with_pid_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.pid_prefix = prefix.into();
        self
    }

    /// Generates processes from the given random source.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        (1..=self.count)
            .map(|n| {
                ProcessSpec::new(
                    format!("{}{n}", self.pid_prefix),
                    rng.random_range(self.burst_range.0..=self.burst_range.1),
                )
                .with_arrival(rng.random_range(0..=self.max_arrival))
                .with_priority(rng.random_range(self.priority_range.0..=self.priority_range.1))
            })
            .collect()
    }

    /// Generates processes from a fixed seed.
    pub fn generate_seeded(&self, seed: u64) -> Vec<ProcessSpec> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(5)
    }
}
