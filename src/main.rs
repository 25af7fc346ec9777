//! Command-line runner for the data locality benchmark.

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use locality::harness::config::{DEFAULT_HIGH, DEFAULT_LOW, DEFAULT_RUNS, DEFAULT_SIZE};
use locality::{BenchConfig, run};

const DEFAULT_LOG_FILTER: &str = "locality=warn";

#[derive(Debug, Parser)]
#[command(
    name = "locality",
    version,
    about = "Time row-major vs column-major summation of a large matrix",
    long_about = None
)]
struct CliArgs {
    /// Matrix dimension N (the matrix is N x N)
    #[arg(short = 'n', long, env = "LOCALITY_SIZE", default_value_t = DEFAULT_SIZE as i64, allow_negative_numbers = true)]
    size: i64,

    /// Timed runs per traversal order
    #[arg(short, long, env = "LOCALITY_RUNS", default_value_t = DEFAULT_RUNS as i64, allow_negative_numbers = true)]
    runs: i64,

    /// RNG seed for a reproducible matrix
    #[arg(short, long, env = "LOCALITY_SEED")]
    seed: Option<u64>,

    /// Smallest generated value (inclusive)
    #[arg(long, env = "LOCALITY_LOW", default_value_t = DEFAULT_LOW, allow_negative_numbers = true)]
    low: i32,

    /// Upper bound of generated values (exclusive)
    #[arg(long, env = "LOCALITY_HIGH", default_value_t = DEFAULT_HIGH, allow_negative_numbers = true)]
    high: i32,
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;

    let builder = fmt().with_writer(io::stderr);
    let builder = match std::env::var("RUST_LOG").ok().and_then(|expr| EnvFilter::try_new(expr).ok()) {
        Some(filter) => builder.with_env_filter(filter),
        None => builder.with_env_filter(DEFAULT_LOG_FILTER),
    };
    let _ = builder.try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let CliArgs {
        size,
        runs,
        seed,
        low,
        high,
    } = CliArgs::parse();

    let config = BenchConfig::from_signed(size, runs, low, high, seed).context("invalid configuration")?;
    tracing::debug!(?config, "starting benchmark");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(&config, &mut out).context("benchmark aborted")?;
    out.flush()?;

    tracing::debug!(slowdown = ?result.slowdown, "benchmark finished");
    Ok(())
}
