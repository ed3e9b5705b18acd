//! Timeline (Gantt chart) model.
//!
//! A timeline is the append-only record of CPU allocations produced by a
//! dispatch policy. Non-preemptive policies emit one slice per process;
//! round-robin emits one slice per time quantum.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};
use std::fmt;

/// One CPU allocation interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Process that held the CPU.
    pub pid: String,
    /// Slice start time.
    pub start: i64,
    /// Slice end time (exclusive).
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(pid: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            pid: pid.into(),
            start,
            end,
        }
    }

    /// Slice length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether two slices share any instant.
    #[inline]
    pub fn overlaps(&self, other: &Slice) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.pid, self.start, self.end)
    }
}

/// Ordered sequence of CPU allocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub(crate) fn push(&mut self, slice: Slice) {
        debug_assert!(
            self.slices.last().is_none_or(|last| last.end <= slice.start),
            "slices must be appended in time order"
        );
        self.slices.push(slice);
    }

    /// All slices in dispatch order.
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Number of slices (dispatches).
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing was dispatched.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Latest slice end, or 0 for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total time the CPU was allocated.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Time in `[0, makespan)` with no process on the CPU.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Returns all slices of a given process.
    pub fn slices_for(&self, pid: &str) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.pid == pid).collect()
    }

    /// First dispatch time of a process.
    pub fn first_start(&self, pid: &str) -> Option<i64> {
        self.slices.iter().find(|s| s.pid == pid).map(|s| s.start)
    }

    /// Completion time of a process (end of its last slice).
    pub fn completion_time(&self, pid: &str) -> Option<i64> {
        self.slices
            .iter()
            .filter(|s| s.pid == pid)
            .map(|s| s.end)
            .max()
    }

    /// Finds the first pair of overlapping slices, if any.
    pub fn find_overlap(&self) -> Option<(&Slice, &Slice)> {
        let mut sorted: Vec<&Slice> = self.slices.iter().collect();
        sorted.sort_by_key(|s| (s.start, s.end));
        sorted
            .windows(2)
            .find(|w| w[0].overlaps(w[1]))
            .map(|w| (w[0], w[1]))
    }

    /// Merges back-to-back slices of the same process.
    ///
    /// `P1:0-2, P1:2-4` becomes `P1:0-4`. Slices separated by an idle gap
    /// stay separate.
    pub fn coalesced(&self) -> Timeline {
        let mut merged: Vec<Slice> = Vec::with_capacity(self.slices.len());
        for slice in &self.slices {
            match merged.last_mut() {
                Some(last) if last.pid == slice.pid && last.end == slice.start => {
                    last.end = slice.end;
                }
                _ => merged.push(slice.clone()),
            }
        }
        Timeline { slices: merged }
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slice) in self.slices.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{slice}")?;
        }
        Ok(())
    }
}

impl FromIterator<Slice> for Timeline {
    fn from_iter<I: IntoIterator<Item = Slice>>(iter: I) -> Self {
        Self {
            slices: iter.into_iter().collect(),
        }
    }
}
