use super::error::ThroughputError;

/// Configuration for a throughput measurement run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThroughputConfig {
    /// Timed calls performed by each thread
    pub iterations: u64,
    /// Number of threads running the operation concurrently
    pub threads: usize,
    /// Untimed calls performed before the timed loop
    pub warmup_iterations: u64,
}

impl Default for ThroughputConfig {
    /// One million calls on a single thread after a short warmup.
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            threads: 1,
            warmup_iterations: 10_000,
        }
    }
}

impl ThroughputConfig {
    pub fn new(iterations: u64, threads: usize, warmup_iterations: u64) -> Self {
        Self {
            iterations,
            threads,
            warmup_iterations,
        }
    }

    /// Short single-threaded run, for smoke tests and CI.
    pub fn quick() -> Self {
        Self {
            iterations: 10_000,
            threads: 1,
            warmup_iterations: 100,
        }
    }

    /// One thread per logical core.
    pub fn saturate() -> Self {
        Self {
            threads: num_cpus::get(),
            ..Self::default()
        }
    }

    /// Check that the configuration describes a run that does some work.
    pub fn validate(&self) -> Result<(), ThroughputError> {
        if self.iterations == 0 {
            return Err(ThroughputError::ZeroIterations);
        }
        if self.threads == 0 {
            return Err(ThroughputError::ZeroThreads);
        }
        Ok(())
    }
}
