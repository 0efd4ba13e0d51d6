//! Error type shared by every matrix operation.

use thiserror::Error;

/// Errors raised by matrix construction, indexing and algebra.
///
/// All of these are usage errors: they are returned at the point of
/// violation and nothing in the crate retries or recovers from them.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// Zero rows or zero columns requested.
    #[error("Matrix dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// `get`/`set` outside the logical shape.
    #[error("Matrix index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Elementwise operation on operands of different shape.
    #[error("Matrix must have the same dimensions: {}x{} vs {}x{}", left.0, left.1, right.0, right.1)]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Matrix product where the inner dimensions disagree.
    #[error("Dimensions of {left_cols} and {right_rows} do not match")]
    DimensionMismatch { left_cols: usize, right_rows: usize },

    /// Operation that needs a square matrix got a rectangular one.
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Requested behaviour is outside what the crate implements.
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    /// Flat buffer does not hold exactly `rows * cols` values.
    #[error("Buffer holds {actual} values, expected {expected}")]
    BufferLength { expected: usize, actual: usize },

    /// Nested-row construction with rows of uneven length.
    #[error("Row {row} has {actual} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Dedicated worker pool could not be created.
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result alias for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;
