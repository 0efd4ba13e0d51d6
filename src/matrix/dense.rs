//! Owned dense storage with a lazy transpose flag.

use std::borrow::Cow;

use super::transpose::transposed_buffer;
use crate::error::{MatrixError, Result};

/// Dense `rows × cols` matrix of `f64`.
///
/// The buffer is row-major relative to the orientation the matrix had
/// before any transpose. [`Matrix::transpose`] only flips a flag and swaps
/// the logical dimensions, so every read and write goes through
/// [`Matrix::offset`].
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    transposed: bool,
    data: Vec<f64>,
}

impl Matrix {
    /// Zero-filled `rows × cols` matrix.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimension`] if either dimension is zero or
    /// `rows * cols` doubles cannot be addressed.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = check_dims(rows, cols)?;
        Ok(Self::from_parts(rows, cols, vec![0.0; len]))
    }

    /// Same as [`Matrix::new`].
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols)
    }

    /// `n × n` identity.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Wrap an already-built row-major buffer.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimension`] for a zero dimension,
    /// [`MatrixError::BufferLength`] if `data.len() != rows * cols`.
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.get(1, 0).unwrap(), 3.0);
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let len = check_dims(rows, cols)?;
        if data.len() != len {
            return Err(MatrixError::BufferLength {
                expected: len,
                actual: data.len(),
            });
        }
        Ok(Self::from_parts(rows, cols, data))
    }

    /// Build from a list of rows, all of the same length.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimension`] if there are no rows or the rows
    /// are empty, [`MatrixError::RaggedRows`] if a row's length differs
    /// from the first row's.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let len = check_dims(rows.len(), width)?;

        let mut data = Vec::with_capacity(len);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self::from_parts(rows.len(), width, data))
    }

    /// `1 × n` matrix holding `values`.
    pub fn row_vector(values: &[f64]) -> Result<Self> {
        Self::from_vec(1, values.len(), values.to_vec())
    }

    /// Take ownership of a buffer whose shape the caller already knows is
    /// right. Every internal operation that produces a result ends here.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        debug_assert_eq!(data.len(), rows * cols);
        Self {
            rows,
            cols,
            transposed: false,
            data,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Whether a lazy transpose is pending on the buffer.
    pub fn is_transposed(&self) -> bool {
        self.transposed
    }

    /// Physical offset of logical `(r, c)`. No bounds check.
    #[inline]
    pub(crate) fn offset(&self, r: usize, c: usize) -> usize {
        if self.transposed {
            c * self.rows + r
        } else {
            r * self.cols + c
        }
    }

    /// Logical `(r, c)` without a bounds check beyond the buffer's own.
    #[inline]
    pub(crate) fn at(&self, r: usize, c: usize) -> f64 {
        self.data[self.offset(r, c)]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, r: usize, c: usize) -> &mut f64 {
        let idx = self.offset(r, c);
        &mut self.data[idx]
    }

    fn check_index(&self, r: usize, c: usize) -> Result<()> {
        if r >= self.rows || c >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row: r,
                col: c,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Value at logical `(r, c)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexOutOfRange`] if `r >= rows` or `c >= cols`.
    pub fn get(&self, r: usize, c: usize) -> Result<f64> {
        self.check_index(r, c)?;
        Ok(self.at(r, c))
    }

    /// Overwrite the value at logical `(r, c)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexOutOfRange`] if `r >= rows` or `c >= cols`.
    pub fn set(&mut self, r: usize, c: usize, value: f64) -> Result<()> {
        self.check_index(r, c)?;
        *self.at_mut(r, c) = value;
        Ok(())
    }

    /// Transpose in place in O(1) and return `self` for chaining.
    ///
    /// The buffer is not touched.
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.transpose().get(0, 1).unwrap(), 3.0);
    /// ```
    pub fn transpose(&mut self) -> &mut Self {
        std::mem::swap(&mut self.rows, &mut self.cols);
        self.transposed = !self.transposed;
        self
    }

    /// Logical contents in row-major order, with any pending transpose
    /// applied.
    pub fn to_vec(&self) -> Vec<f64> {
        self.row_major().into_owned()
    }

    /// Logical row-major view: borrowed when the buffer is already in that
    /// layout, materialized otherwise.
    pub(crate) fn row_major(&self) -> Cow<'_, [f64]> {
        if self.transposed {
            // physical layout is cols × rows
            Cow::Owned(transposed_buffer(&self.data, self.cols, self.rows))
        } else {
            Cow::Borrowed(&self.data)
        }
    }

    /// Physical buffer. Only meaningful as row-major when the matrix is
    /// not transposed.
    pub(crate) fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

/// Buffer length for a `rows × cols` matrix.
fn check_dims(rows: usize, cols: usize) -> Result<usize> {
    const MAX_LEN: usize = isize::MAX as usize / std::mem::size_of::<f64>();
    match rows.checked_mul(cols) {
        Some(len) if rows > 0 && cols > 0 && len <= MAX_LEN => Ok(len),
        _ => Err(MatrixError::InvalidDimension { rows, cols }),
    }
}
