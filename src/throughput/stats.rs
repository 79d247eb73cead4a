use std::time::Duration;

use super::operation::Operation;

/// Result of measuring one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OpStats {
    /// Operation that was measured
    pub operation: Operation,
    /// Timed calls per thread
    pub iterations: u64,
    /// Threads that ran concurrently
    pub threads: usize,
    /// Wall-clock time of the timed section
    pub elapsed: Duration,
}

impl OpStats {
    pub fn new(operation: Operation, iterations: u64, threads: usize, elapsed: Duration) -> Self {
        Self {
            operation,
            iterations,
            threads,
            elapsed,
        }
    }

    /// Calls performed across all threads.
    pub fn total_operations(&self) -> u64 {
        self.iterations * self.threads as u64
    }

    /// Aggregate throughput across all threads. Zero when no time elapsed.
    pub fn ops_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.total_operations() as f64 / secs
    }

    /// Wall-clock nanoseconds per call as seen by a single thread.
    pub fn nanos_per_op(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.iterations as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_rates() {
        let stats = OpStats::new(Operation::Vec3Add, 1_000, 4, Duration::from_millis(2));

        assert_eq!(stats.total_operations(), 4_000);
        assert!((stats.ops_per_second() - 2_000_000.0).abs() < 1e-6);
        assert!((stats.nanos_per_op() - 2_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_elapsed() {
        let stats = OpStats::new(Operation::Vec4Dot, 10, 1, Duration::ZERO);
        assert_eq!(stats.ops_per_second(), 0.0);
        assert_eq!(stats.nanos_per_op(), 0.0);
    }
}
