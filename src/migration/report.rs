//! Run counters and the final summary.

use std::time::Duration;

/// Outcome tallies for one run. Each processed record bumps exactly one
/// field; nothing is ever reset mid-run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationCounters {
    pub created: u64,
    pub updated: u64,
    pub errors: u64,
}

/// Final run summary handed back to the binary.
#[derive(Debug, Clone)]
pub struct MigrationReport {
    pub counters: MigrationCounters,
    pub total: usize,
    pub elapsed: Duration,
}

impl MigrationReport {
    pub fn new(counters: MigrationCounters, total: usize, elapsed: Duration) -> Self {
        Self {
            counters,
            total,
            elapsed,
        }
    }

    /// Records processed per wall-clock second; 0 for an instantaneous run
    /// rather than a division error.
    pub fn records_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.total as f64 / secs
        } else {
            0.0
        }
    }
}
