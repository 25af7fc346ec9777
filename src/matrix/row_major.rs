use super::Matrix;

/// Sum every element walking rows in the outer loop, columns in the inner.
///
/// This matches the storage order, so the inner loop reads the buffer with
/// stride 1 and every cache line fetched is fully used before moving on.
///
/// Accumulates in `i64` so large matrices cannot overflow.
///
/// # Example
///
/// ```
/// use locality::{Matrix, sum_row_major};
///
/// let m = Matrix::from_vec(2, vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(sum_row_major(&m), 10);
/// ```
pub fn sum_row_major(matrix: &Matrix) -> i64 {
    let n = matrix.n;
    let data = &matrix.data;
    let mut total: i64 = 0;
    for r in 0..n {
        for c in 0..n {
            total += data[r * n + c] as i64;
        }
    }
    total
}
