//! Throughput measurement for the vector operations.
//!
//! Each [`Operation`] runs in a tight loop on one or more threads and the
//! wall-clock time is turned into an operations-per-second figure.

pub mod config;
pub mod error;
pub mod operation;
pub mod runner;
pub mod stats;

pub use config::ThroughputConfig;
pub use error::ThroughputError;
pub use operation::Operation;
pub use runner::{measure, measure_all};
pub use stats::OpStats;
