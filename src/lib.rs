//! How much does memory access order cost?
//!
//! Builds one big N×N `i32` matrix stored row-major, sums it twice (once
//! row by row, once column by column) and times both. Same data, same
//! arithmetic, same answer. The only difference is whether consecutive
//! reads are adjacent in memory or a full row apart, and on a large
//! matrix that difference alone is usually several times the runtime.
//!
//! ## Usage
//!
//! ```
//! use locality::{BenchConfig, run};
//!
//! let config = BenchConfig { size: 64, runs: 2, seed: Some(7), ..BenchConfig::default() };
//! let mut report = Vec::new();
//! let result = run(&config, &mut report).unwrap();
//!
//! assert_eq!(result.row_major.samples.len(), 2);
//! assert!(result.checksums_agree());
//! ```
//!
//! Or just the summers:
//!
//! ```
//! use locality::{Matrix, sum_column_major, sum_row_major};
//!
//! let m = Matrix::from_vec(3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
//! assert_eq!(sum_row_major(&m), 45);
//! assert_eq!(sum_column_major(&m), 45);
//! ```
//!
//! Everything runs on one thread. Parallelizing the sums would change the
//! cache behaviour being measured.

pub mod error;
pub mod harness;
pub mod matrix;

pub use error::{LocalityError, Result};
pub use harness::config::BenchConfig;
pub use harness::report::{BenchmarkResult, MIN_MEASURABLE_SECS, Slowdown};
pub use harness::run;
pub use harness::timing::{Timings, Traversal, measure};
pub use matrix::Matrix;
pub use matrix::column_major::sum_column_major;
pub use matrix::generate::{generate, generate_seeded};
pub use matrix::row_major::sum_row_major;
