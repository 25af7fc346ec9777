//! Aggregation and the final performance analysis.

use std::io::Write;

use super::timing::Timings;
use crate::error::Result;

/// Row-major averages below this (seconds) are treated as unmeasurable.
pub const MIN_MEASURABLE_SECS: f64 = 1e-6;

pub const RULE: &str = "----------------------------------------";

/// Outcome of dividing column-major time by row-major time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slowdown {
    /// Column-major took this many times as long.
    Measured(f64),
    /// Row-major average was too close to the clock's resolution to divide by.
    Unmeasurable,
}

impl Slowdown {
    pub fn from_averages(row_major: f64, column_major: f64) -> Self {
        if !row_major.is_finite() || !column_major.is_finite() || row_major < MIN_MEASURABLE_SECS {
            return Slowdown::Unmeasurable;
        }
        Slowdown::Measured(column_major / row_major)
    }

    pub fn ratio(self) -> Option<f64> {
        match self {
            Slowdown::Measured(r) => Some(r),
            Slowdown::Unmeasurable => None,
        }
    }
}

/// Everything one harness run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub row_major: Timings,
    pub column_major: Timings,
    pub slowdown: Slowdown,
}

impl BenchmarkResult {
    pub fn new(row_major: Timings, column_major: Timings) -> Self {
        let slowdown = Slowdown::from_averages(row_major.average(), column_major.average());
        BenchmarkResult {
            row_major,
            column_major,
            slowdown,
        }
    }

    /// Both traversals saw the same total. False means a traversal bug.
    pub fn checksums_agree(&self) -> bool {
        self.row_major.checksum == self.column_major.checksum
    }

    /// Print the "Performance Analysis" block.
    pub fn write_analysis<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        let row = self.row_major.average();
        let col = self.column_major.average();

        writeln!(out, "\n--- Performance Analysis ---")?;
        writeln!(out, "Average Row-Major Time:   {:.6} seconds", row)?;
        writeln!(out, "Average Column-Major Time: {:.6} seconds", col)?;

        match self.slowdown {
            Slowdown::Measured(ratio) => writeln!(
                out,
                "Column-Major is approximately {:.2}x slower than Row-Major.",
                ratio
            )?,
            Slowdown::Unmeasurable => writeln!(
                out,
                "Row-major time was too small to calculate the slowdown ratio \
                 (below {:.0e} seconds).",
                MIN_MEASURABLE_SECS
            )?,
        }

        if !self.checksums_agree() {
            writeln!(
                out,
                "Warning: sums differ (row-major {}, column-major {}); a traversal is broken.",
                self.row_major.checksum, self.column_major.checksum
            )?;
        }

        writeln!(out)?;
        writeln!(
            out,
            "Observation: the row-major traversal is faster because the matrix is stored\n\
             in row-major (C-contiguous) order. Walking it row by row touches consecutive\n\
             addresses, so each cache line fetched from memory is fully used. Column-major\n\
             access jumps a whole row ahead on every step and keeps missing the cache."
        )?;
        writeln!(out, "{}", RULE)?;
        Ok(())
    }
}
