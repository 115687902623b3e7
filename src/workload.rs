//! Synthetic workload generation.
//!
//! Builds random process batches for demos, benchmarks and tests. Pids
//! are `P1..Pn`, so generated batches always satisfy input validation:
//! unique non-empty pids, bursts of at least one tick, non-negative
//! arrivals. The caller supplies the RNG, so seeded generators replay
//! the same workload.

use rand::Rng;

use crate::models::ProcessDescriptor;

/// Builder for random process batches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    process_count: usize,
    arrival_window: (i64, i64),
    burst_range: (i64, i64),
    priority_range: (i32, i32),
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            process_count: 5,
            arrival_window: (0, 10),
            burst_range: (1, 10),
            priority_range: (0, 0),
        }
    }
}

impl WorkloadGenerator {
    /// Generator with the default shape: 5 processes, arrivals in
    /// `[0, 10]`, bursts in `[1, 10]`, priority 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many processes to generate.
    pub fn with_processes(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    /// Sets the arrival-tick window (clamped to non-negative ticks).
    pub fn with_arrival_window(mut self, min: i64, max: i64) -> Self {
        let min = min.max(0);
        self.arrival_window = (min, max.max(min));
        self
    }

    /// Sets the burst-time range (clamped to at least one tick).
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        let min = min.max(1);
        self.burst_range = (min, max.max(min));
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = (min, max.max(min));
        self
    }

    /// Draws one batch from the RNG.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessDescriptor> {
        let (arrival_min, arrival_max) = self.arrival_window;
        let (burst_min, burst_max) = self.burst_range;
        let (priority_min, priority_max) = self.priority_range;

        (1..=self.process_count)
            .map(|n| {
                ProcessDescriptor::new(
                    format!("P{n}"),
                    rng.random_range(arrival_min..=arrival_max),
                    rng.random_range(burst_min..=burst_max),
                )
                .with_priority(rng.random_range(priority_min..=priority_max))
            })
            .collect()
    }
}
