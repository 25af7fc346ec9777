//! Repeated wall-clock timing of one traversal.

use std::hint::black_box;
use std::io::Write;
use std::time::Instant;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::matrix::column_major::sum_column_major;
use crate::matrix::row_major::sum_row_major;

/// Which way the matrix is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    RowMajor,
    ColumnMajor,
}

impl Traversal {
    /// Human label used in the report ("Row-Major", "Column-Major").
    pub fn label(self) -> &'static str {
        match self {
            Traversal::RowMajor => "Row-Major",
            Traversal::ColumnMajor => "Column-Major",
        }
    }

    /// The summing function for this order.
    pub fn summer(self) -> fn(&Matrix) -> i64 {
        match self {
            Traversal::RowMajor => sum_row_major,
            Traversal::ColumnMajor => sum_column_major,
        }
    }
}

/// Per-run durations (seconds) for one traversal, in run order.
#[derive(Debug, Clone, PartialEq)]
pub struct Timings {
    pub traversal: Traversal,
    pub samples: Vec<f64>,
    /// Sum returned by the last run.
    pub checksum: i64,
}

impl Timings {
    /// Mean of the samples, 0.0 if there are none.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }
}

/// Run `f` over `matrix` `runs` times, timing each call with a monotonic
/// clock and printing one "Run i" line per call to `out`.
///
/// Printing happens after the clock is stopped so it never lands inside a
/// sample.
pub fn measure<F, W>(
    traversal: Traversal,
    matrix: &Matrix,
    runs: usize,
    f: F,
    out: &mut W,
) -> Result<Timings>
where
    F: Fn(&Matrix) -> i64,
    W: Write + ?Sized,
{
    let mut samples = Vec::with_capacity(runs);
    let mut checksum = 0;

    for i in 0..runs {
        let start = Instant::now();
        let sum = f(black_box(matrix));
        let duration = start.elapsed().as_secs_f64();
        checksum = black_box(sum);

        tracing::trace!(traversal = traversal.label(), run = i + 1, duration, "timed run");
        writeln!(out, "  Run {}: {:.6} seconds", i + 1, duration)?;
        samples.push(duration);
    }

    Ok(Timings {
        traversal,
        samples,
        checksum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_measure_yields_one_sample_per_run() {
        let m = Matrix::from_vec(3, (1..=9).collect()).unwrap();
        let mut out = Vec::new();
        let t = measure(Traversal::RowMajor, &m, 4, sum_row_major, &mut out).unwrap();

        assert_eq!(t.samples.len(), 4);
        assert_eq!(t.checksum, 45);
        assert!(t.samples.iter().all(|s| s.is_finite() && *s >= 0.0));

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("  Run 1: "));
        assert!(text.contains("  Run 4: "));
    }

    #[test]
    fn test_average() {
        let t = Timings {
            traversal: Traversal::ColumnMajor,
            samples: vec![0.1, 0.2, 0.3],
            checksum: 0,
        };
        assert_relative_eq!(t.average(), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_average_of_nothing_is_zero() {
        let t = Timings {
            traversal: Traversal::RowMajor,
            samples: Vec::new(),
            checksum: 0,
        };
        assert_eq!(t.average(), 0.0);
    }

    #[test]
    fn test_traversal_dispatch() {
        let m = Matrix::from_vec(2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(Traversal::RowMajor.summer()(&m), 10);
        assert_eq!(Traversal::ColumnMajor.summer()(&m), 10);
        assert_eq!(Traversal::ColumnMajor.label(), "Column-Major");
    }
}
