//! Position-wise algebra between two matrices or a matrix and a scalar.

use super::dense::Matrix;
use crate::error::{MatrixError, Result};

impl Matrix {
    /// `op(self[i, j], other[i, j])` for every position. Result is
    /// untransposed.
    fn zip_with<F>(&self, other: &Matrix, op: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.dims() != other.dims() {
            return Err(MatrixError::ShapeMismatch {
                left: self.dims(),
                right: other.dims(),
            });
        }

        let (rows, cols) = self.dims();
        let data = if !self.is_transposed() && !other.is_transposed() {
            self.as_slice()
                .iter()
                .zip(other.as_slice())
                .map(|(&a, &b)| op(a, b))
                .collect()
        } else {
            let mut data = Vec::with_capacity(rows * cols);
            for r in 0..rows {
                for c in 0..cols {
                    data.push(op(self.at(r, c), other.at(r, c)));
                }
            }
            data
        };
        Ok(Matrix::from_parts(rows, cols, data))
    }

    /// `op(self[i, j], scalar)` for every position. The pending transpose
    /// carries over unchanged since the layout is kept.
    fn map_scalar<F>(&self, scalar: f64, op: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64,
    {
        let mut out = self.clone();
        for x in out.data_mut() {
            *x = op(*x, scalar);
        }
        out
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ShapeMismatch`] if the shapes differ.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ShapeMismatch`] if the shapes differ.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Elementwise (Hadamard) product. Not the matrix product.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ShapeMismatch`] if the shapes differ.
    pub fn hadamard(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |a, b| a * b)
    }

    pub fn add_scalar(&self, scalar: f64) -> Matrix {
        self.map_scalar(scalar, |a, b| a + b)
    }

    pub fn sub_scalar(&self, scalar: f64) -> Matrix {
        self.map_scalar(scalar, |a, b| a - b)
    }

    pub fn scale(&self, scalar: f64) -> Matrix {
        self.map_scalar(scalar, |a, b| a * b)
    }

    pub fn negate(&self) -> Matrix {
        self.scale(-1.0)
    }

    /// Exact comparison of logical contents. Different shapes compare
    /// unequal.
    pub fn equals(&self, other: &Matrix) -> bool {
        if self.dims() != other.dims() {
            return false;
        }
        if self.is_transposed() == other.is_transposed() {
            return self.as_slice() == other.as_slice();
        }
        let (rows, cols) = self.dims();
        (0..rows).all(|r| (0..cols).all(|c| self.at(r, c) == other.at(r, c)))
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

/// `out = a + b` over raw buffers. No shape checks: callers pass equal
/// length, untransposed buffers.
#[inline]
pub(crate) fn fast_add(a: &[f64], b: &[f64], out: &mut [f64]) {
    debug_assert!(a.len() == b.len() && a.len() == out.len());
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = x + y;
    }
}

/// `out = a - b` over raw buffers, same contract as [`fast_add`].
#[inline]
pub(crate) fn fast_sub(a: &[f64], b: &[f64], out: &mut [f64]) {
    debug_assert!(a.len() == b.len() && a.len() == out.len());
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = x - y;
    }
}
