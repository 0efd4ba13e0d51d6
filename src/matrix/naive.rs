//! Textbook triple-loop multiplication.

use super::dense::Matrix;
use crate::error::{MatrixError, Result};

/// Naive matrix product `A × B` in i-j-k order.
///
/// Transpose-aware on both operands. Each output cell sums its dot product
/// in a local accumulator before the single store. O(rows·inner·cols);
/// use this for small inputs or as a correctness baseline.
///
/// # Errors
///
/// [`MatrixError::DimensionMismatch`] if `a.cols() != b.rows()`.
///
/// ```
/// use densemat::{Matrix, multiply_naive};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
/// assert_eq!(multiply_naive(&a, &b).unwrap().to_vec(), vec![19.0, 22.0, 43.0, 50.0]);
/// ```
pub fn multiply_naive(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            left_cols: a.cols(),
            right_rows: b.rows(),
        });
    }

    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    let mut c = vec![0.0; m * n];
    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..k {
                sum += a.at(i, p) * b.at(p, j);
            }
            c[i * n + j] = sum;
        }
    }
    Ok(Matrix::from_parts(m, n, c))
}

/// i-j-k kernel over raw row-major buffers: `C = A × B`.
///
/// The leaf of the Strassen recursion. Overwrites `c`.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, overwritten
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub(crate) fn naive_kernel(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    for i in 0..m {
        let a_row = &a[i * k..(i + 1) * k];
        for j in 0..n {
            let mut sum = 0.0;
            for (p, &a_ip) in a_row.iter().enumerate() {
                sum += a_ip * b[p * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}
