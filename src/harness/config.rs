//! Benchmark parameters.

use crate::error::{LocalityError, Result};

/// Default matrix side length. Big enough (16 MB of `i32`) to spill out of
/// L2 on most machines.
pub const DEFAULT_SIZE: usize = 2000;

/// Default number of timed runs per traversal.
pub const DEFAULT_RUNS: usize = 5;

/// Default lower bound (inclusive) of generated values.
pub const DEFAULT_LOW: i32 = 0;

/// Default upper bound (exclusive) of generated values.
pub const DEFAULT_HIGH: i32 = 100;

/// Everything the harness needs, passed in explicitly at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Matrix dimension N.
    pub size: usize,
    /// Timed repetitions K per traversal kind.
    pub runs: usize,
    /// Values are drawn from `[low, high)`.
    pub low: i32,
    pub high: i32,
    /// RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            size: DEFAULT_SIZE,
            runs: DEFAULT_RUNS,
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
            seed: None,
        }
    }
}

impl BenchConfig {
    /// Build a config from possibly non-positive user input.
    ///
    /// Negative or zero `size`/`runs` become `InvalidArgument`.
    pub fn from_signed(size: i64, runs: i64, low: i32, high: i32, seed: Option<u64>) -> Result<Self> {
        let config = BenchConfig {
            size: positive("size", size)?,
            runs: positive("runs", runs)?,
            low,
            high,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check size > 0, runs > 0 and a non-empty value range.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(LocalityError::InvalidArgument {
                name: "size",
                value: 0,
            });
        }
        if self.runs == 0 {
            return Err(LocalityError::InvalidArgument {
                name: "runs",
                value: 0,
            });
        }
        if self.low >= self.high {
            return Err(LocalityError::InvalidRange {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(LocalityError::InvalidArgument { name, value });
    }
    usize::try_from(value).map_err(|_| LocalityError::InvalidArgument { name, value })
}
