//! `vecbench`: quick throughput report for the vecmath operations.
//!
//! For statistically rigorous numbers use `cargo bench`; this binary is for
//! fast comparisons, e.g. precise vs. fast normalization on many threads:
//!
//! ```text
//! vecbench --op vec4_normalize --op vec4_normalize_fast --threads 0
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vecmath::{measure, Operation, ThroughputConfig};

#[derive(Debug, Parser)]
#[command(name = "vecbench", version, about = "Measure vecmath operation throughput")]
struct Cli {
    /// Timed calls per thread
    #[arg(short, long, default_value_t = 1_000_000)]
    iterations: u64,

    /// Worker threads; 0 uses every logical core
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Untimed calls before each measurement
    #[arg(long, default_value_t = 10_000)]
    warmup: u64,

    /// Operation to measure (repeatable); all operations when omitted
    #[arg(long = "op", value_name = "NAME")]
    ops: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> ThroughputConfig {
        let threads = if self.threads == 0 { num_cpus::get() } else { self.threads };
        ThroughputConfig::new(self.iterations, threads, self.warmup)
    }

    fn operations(&self) -> Result<Vec<Operation>> {
        if self.ops.is_empty() {
            return Ok(Operation::ALL.to_vec());
        }
        self.ops
            .iter()
            .map(|name| name.parse::<Operation>().context("invalid --op value"))
            .collect()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let config = cli.config();
    let operations = cli.operations()?;

    tracing::info!(
        version = vecmath::VERSION,
        iterations = config.iterations,
        threads = config.threads,
        "vecbench starting"
    );

    println!("{:<22} {:>12} {:>14}", "operation", "ns/op", "Mops/s");
    for operation in operations {
        let stats = measure(operation, &config)
            .with_context(|| format!("failed to measure {operation}"))?;
        println!(
            "{:<22} {:>12.3} {:>14.2}",
            stats.operation.name(),
            stats.nanos_per_op(),
            stats.ops_per_second() / 1.0e6
        );
    }

    Ok(())
}
