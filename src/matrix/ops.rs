//! Operator sugar over the scalar algebra and indexing.
//!
//! Matrix-by-matrix operations can fail on shape, so they stay as methods
//! returning [`Result`](crate::Result); only the infallible ones get
//! operators here.

use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use super::dense::Matrix;

impl Add<f64> for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: f64) -> Matrix {
        self.add_scalar(rhs)
    }
}

impl Sub<f64> for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: f64) -> Matrix {
        self.sub_scalar(rhs)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        self.scale(rhs)
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs.scale(self)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.negate()
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.negate()
    }
}

/// Transpose-aware `m[(r, c)]`.
///
/// # Panics
///
/// Panics when `(r, c)` is outside the logical shape. Use
/// [`Matrix::get`] for a checked read.
impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        let (rows, cols) = self.dims();
        assert!(
            r < rows && c < cols,
            "Matrix index ({}, {}) out of bounds for {}x{} matrix",
            r,
            c,
            rows,
            cols
        );
        &self.as_slice()[self.offset(r, c)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 {
        let (rows, cols) = self.dims();
        assert!(
            r < rows && c < cols,
            "Matrix index ({}, {}) out of bounds for {}x{} matrix",
            r,
            c,
            rows,
            cols
        );
        self.at_mut(r, c)
    }
}
