use super::Matrix;

/// Sum every element walking columns in the outer loop, rows in the inner.
///
/// The inner loop jumps `n` elements per step (column-wise), so for large
/// `n` nearly every access lands on a different cache line. Same result as
/// [`sum_row_major`](super::row_major::sum_row_major), slower to get there.
pub fn sum_column_major(matrix: &Matrix) -> i64 {
    let n = matrix.n;
    let data = &matrix.data;
    let mut total: i64 = 0;
    for c in 0..n {
        for r in 0..n {
            total += data[r * n + c] as i64;
        }
    }
    total
}
