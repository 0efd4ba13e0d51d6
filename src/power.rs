//! Integer powers by repeated squaring.

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::strassen::multiply;

/// `m` raised to the non-negative integer power `n`.
///
/// Walks the bits of `n` from least significant upward, multiplying the
/// running result by the running square whenever the bit is set. Every
/// product goes through [`multiply`], so large bases use Strassen.
///
/// # Errors
///
/// [`MatrixError::NotSquare`] for a rectangular `m`,
/// [`MatrixError::Unsupported`] for negative `n` (no inverse).
///
/// ```
/// use densemat::{Matrix, power};
///
/// let fib = Matrix::from_rows(&[[1.0, 1.0], [1.0, 0.0]]).unwrap();
/// assert_eq!(power(&fib, 10).unwrap().get(0, 1).unwrap(), 55.0);
/// ```
pub fn power(m: &Matrix, n: i64) -> Result<Matrix> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
        });
    }

    match n {
        n if n < 0 => Err(MatrixError::Unsupported("Inverse not yet implemented")),
        0 => Matrix::identity(m.rows()),
        1 => Ok(m.clone()),
        _ => {
            let mut bits = n as u64;
            let mut result = Matrix::identity(m.rows())?;
            let mut base = m.clone();
            while bits > 0 {
                if bits & 1 == 1 {
                    result = multiply(&result, &base)?;
                }
                bits >>= 1;
                if bits > 0 {
                    base = multiply(&base, &base)?;
                }
            }
            Ok(result)
        }
    }
}

impl Matrix {
    /// Method form of [`power`].
    pub fn pow(&self, n: i64) -> Result<Matrix> {
        power(self, n)
    }
}
