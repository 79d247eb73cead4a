use std::hint::black_box;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::config::ThroughputConfig;
use super::error::ThroughputError;
use super::operation::{Operation, VEC3_LHS, VEC3_RHS, VEC4_LHS, VEC4_RHS};
use super::stats::OpStats;

/// Measure a single operation.
///
/// Runs `warmup_iterations` untimed calls, then `iterations` timed calls on
/// each of `threads` threads. Inputs and results pass through
/// [`black_box`] so the optimizer cannot hoist or drop the work.
///
/// # Examples
/// ```
/// use vecmath::{measure, Operation, ThroughputConfig};
///
/// let stats = measure(Operation::Vec4NormalizeFast, &ThroughputConfig::quick()).unwrap();
/// assert_eq!(stats.total_operations(), 10_000);
/// ```
pub fn measure(operation: Operation, config: &ThroughputConfig) -> Result<OpStats, ThroughputError> {
    config.validate()?;

    let available = num_cpus::get();
    if config.threads > available {
        warn!(
            threads = config.threads,
            available, "More threads than logical cores, results will include scheduling overhead"
        );
    }

    debug!(
        %operation,
        iterations = config.iterations,
        threads = config.threads,
        warmup = config.warmup_iterations,
        "Starting measurement"
    );

    run_iterations(operation, config.warmup_iterations);

    let iterations = config.iterations;
    let start = Instant::now();
    if config.threads == 1 {
        run_iterations(operation, iterations);
    } else {
        std::thread::scope(|scope| {
            for _ in 0..config.threads {
                scope.spawn(move || run_iterations(operation, iterations));
            }
        });
    }
    let elapsed = start.elapsed();

    let stats = OpStats::new(operation, iterations, config.threads, elapsed);
    info!(
        %operation,
        ns_per_op = stats.nanos_per_op(),
        ops_per_sec = stats.ops_per_second(),
        "Measurement complete"
    );
    Ok(stats)
}

/// Measure every operation in [`Operation::ALL`] order.
pub fn measure_all(config: &ThroughputConfig) -> Result<Vec<OpStats>, ThroughputError> {
    Operation::ALL
        .into_iter()
        .map(|operation| measure(operation, config))
        .collect()
}

fn run_iterations(operation: Operation, iterations: u64) {
    match operation {
        Operation::Vec3Add => repeat(iterations, || black_box(VEC3_LHS) + black_box(VEC3_RHS)),
        Operation::Vec4Add => repeat(iterations, || black_box(VEC4_LHS) + black_box(VEC4_RHS)),
        Operation::Vec3Sub => repeat(iterations, || black_box(VEC3_LHS) - black_box(VEC3_RHS)),
        Operation::Vec4Sub => repeat(iterations, || black_box(VEC4_LHS) - black_box(VEC4_RHS)),
        Operation::Vec3Dot => repeat(iterations, || black_box(VEC3_LHS).dot(&black_box(VEC3_RHS))),
        Operation::Vec4Dot => repeat(iterations, || black_box(VEC4_LHS).dot(&black_box(VEC4_RHS))),
        Operation::Vec3Normalize => repeat(iterations, || black_box(VEC3_LHS).normalize()),
        Operation::Vec4Normalize => repeat(iterations, || black_box(VEC4_LHS).normalize()),
        Operation::Vec4NormalizeFast => repeat(iterations, || black_box(VEC4_LHS).normalize_fast()),
        Operation::Vec3Cross => repeat(iterations, || black_box(VEC3_LHS).cross(&black_box(VEC3_RHS))),
        Operation::Vec4Cross => repeat(iterations, || black_box(VEC4_LHS).cross(&black_box(VEC4_RHS))),
    }
}

// Dispatch happens once per run; the loop body is monomorphized per operation.
#[inline(always)]
fn repeat<R>(iterations: u64, mut op: impl FnMut() -> R) {
    for _ in 0..iterations {
        black_box(op());
    }
}
