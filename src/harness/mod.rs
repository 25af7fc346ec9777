//! The benchmark pipeline: generate once, time both traversals, report.
//!
//! Runs strictly in sequence on the calling thread:
//! `Idle -> Generating -> TimingRowMajor -> TimingColumnMajor -> Reporting -> Done`.
//! A generation failure ends in `Aborted` before any matrix or timing
//! output exists.

pub mod config;
pub mod report;
pub mod timing;

use std::io::Write;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::matrix::generate::generate_seeded;
use config::BenchConfig;
use report::{BenchmarkResult, RULE};
use timing::{Timings, Traversal, measure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Generating,
    TimingRowMajor,
    TimingColumnMajor,
    Reporting,
    Done,
    Aborted,
}

fn enter(phase: Phase) {
    tracing::debug!(?phase, "harness phase");
}

/// Run the whole benchmark, writing the report to `out`.
///
/// The config is validated before anything is written, so an invalid size
/// or run count produces no output at all.
pub fn run<W: Write + ?Sized>(config: &BenchConfig, out: &mut W) -> Result<BenchmarkResult> {
    enter(Phase::Idle);
    if let Err(e) = config.validate() {
        enter(Phase::Aborted);
        return Err(e);
    }

    writeln!(out, "--- Data Locality Performance Test ---")?;
    writeln!(out, "Matrix size: {}x{}", config.size, config.size)?;
    writeln!(out, "Number of runs per test: {}", config.runs)?;
    writeln!(out, "{}", RULE)?;

    enter(Phase::Generating);
    writeln!(out, "Generating matrix...")?;
    let matrix = match generate_seeded(config.size, config.low, config.high, config.seed) {
        Ok(m) => m,
        Err(e) => {
            enter(Phase::Aborted);
            return Err(e);
        }
    };
    writeln!(out, "Matrix generated.")?;
    writeln!(out, "{}", RULE)?;

    enter(Phase::TimingRowMajor);
    let row_major = time_traversal(Traversal::RowMajor, &matrix, config.runs, out)?;

    enter(Phase::TimingColumnMajor);
    let column_major = time_traversal(Traversal::ColumnMajor, &matrix, config.runs, out)?;

    enter(Phase::Reporting);
    let result = BenchmarkResult::new(row_major, column_major);
    if !result.checksums_agree() {
        tracing::warn!(
            row_major = result.row_major.checksum,
            column_major = result.column_major.checksum,
            "traversal sums diverge"
        );
    }
    result.write_analysis(out)?;

    enter(Phase::Done);
    Ok(result)
}

fn time_traversal<W: Write + ?Sized>(
    traversal: Traversal,
    matrix: &Matrix,
    runs: usize,
    out: &mut W,
) -> Result<Timings> {
    let label = traversal.label();
    writeln!(out, "Testing {} Summation ({} runs)...", label, runs)?;
    let timings = measure(traversal, matrix, runs, traversal.summer(), out)?;
    writeln!(out, "Average {} Time: {:.6} seconds", label, timings.average())?;
    writeln!(out, "{}", RULE)?;
    Ok(timings)
}
