/// Errors that can occur while setting up a throughput measurement
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThroughputError {
    #[error("Invalid iteration count: must be greater than zero")]
    ZeroIterations,

    #[error("Invalid thread count: must be greater than zero")]
    ZeroThreads,

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}
