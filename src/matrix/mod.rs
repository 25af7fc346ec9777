//! Square integer matrix and the two traversal orders.
//!
//! The matrix is stored row-major in one contiguous buffer: element
//! `(r, c)` lives at offset `r * n + c`. The summers in `row_major` and
//! `column_major` walk that same buffer in opposite orders.

pub mod column_major;
pub mod generate;
pub mod row_major;

use crate::error::{LocalityError, Result};

/// An N×N grid of `i32`, contiguous and row-major.
///
/// Immutable once built. Summers only ever get `&Matrix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    n: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// Wrap an existing row-major buffer.
    ///
    /// Fails with `InvalidArgument` for `n == 0` and `DimensionMismatch`
    /// if `data.len() != n * n`.
    ///
    /// # Example
    ///
    /// ```
    /// use locality::Matrix;
    ///
    /// let m = Matrix::from_vec(2, vec![1, 2,
    ///                                  3, 4]).unwrap();
    /// assert_eq!(m.get(1, 0), 3);
    /// ```
    pub fn from_vec(n: usize, data: Vec<i32>) -> Result<Self> {
        if n == 0 {
            return Err(LocalityError::InvalidArgument {
                name: "size",
                value: 0,
            });
        }
        let expected = n
            .checked_mul(n)
            .ok_or(LocalityError::AllocationFailure { size: n })?;
        if data.len() != expected {
            return Err(LocalityError::DimensionMismatch {
                size: n,
                expected,
                len: data.len(),
            });
        }
        Ok(Matrix { n, data })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Total element count, N×N.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a matrix has at least one element.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at row `r`, column `c`.
    ///
    /// # Panics
    ///
    /// Panics if `r` or `c` is out of bounds.
    pub fn get(&self, r: usize, c: usize) -> i32 {
        assert!(r < self.n && c < self.n, "({}, {}) out of bounds for {}x{}", r, c, self.n, self.n);
        self.data[r * self.n + c]
    }

    /// The raw row-major buffer.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }
}
