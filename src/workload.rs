//! Random workload generation.
//!
//! Produces process sets and size lists for demos and for exercising the
//! engines over many inputs. Generators are seedable, so a seed always
//! reproduces the same workload.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::InputLimits;
use crate::models::Process;

/// Random workload source bounded by [`InputLimits`].
///
/// ```
/// use os_sim::config::InputLimits;
/// use os_sim::workload::WorkloadGenerator;
///
/// let mut a = WorkloadGenerator::seeded(42, InputLimits::default());
/// let mut b = WorkloadGenerator::seeded(42, InputLimits::default());
/// assert_eq!(a.processes(), b.processes());
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator<R: Rng> {
    rng: R,
    limits: InputLimits,
}

impl WorkloadGenerator<StdRng> {
    /// Creates a reproducible generator.
    pub fn seeded(seed: u64, limits: InputLimits) -> Self {
        Self::new(StdRng::seed_from_u64(seed), limits)
    }
}

impl<R: Rng> WorkloadGenerator<R> {
    /// Creates a generator over any RNG.
    pub fn new(rng: R, limits: InputLimits) -> Self {
        Self { rng, limits }
    }

    /// Limits in effect.
    pub fn limits(&self) -> &InputLimits {
        &self.limits
    }

    /// A process set `P1..Pn` with `n`, bursts and arrivals drawn
    /// uniformly from the limits.
    ///
    /// # Panics
    /// If a range in the limits is empty (see [`InputLimits::validate`]).
    pub fn processes(&mut self) -> Vec<Process> {
        let count = self.rng.random_range(self.limits.process_range());
        (0..count).map(|i| self.process(Process::label(i))).collect()
    }

    /// One process with random burst and arrival times.
    pub fn process(&mut self, id: impl Into<String>) -> Process {
        let burst = self.rng.random_range(self.limits.burst_range());
        let arrival = self.rng.random_range(self.limits.arrival_range());
        Process::new(id, burst).with_arrival(arrival)
    }

    /// `count` sizes drawn uniformly from `1..=max`.
    pub fn sizes(&mut self, count: usize, max: u64) -> Vec<u64> {
        let max = max.max(1);
        (0..count).map(|_| self.rng.random_range(1..=max)).collect()
    }
}
