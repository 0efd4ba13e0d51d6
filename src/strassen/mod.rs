//! Strassen multiplication with a parallel fan-out over the seven products.
//!
//! Inputs at or above [`LEAF_SIZE`] on every side are padded to a square of
//! side [`padding::aligned_side`], multiplied recursively, and cropped back.
//! At each level the seven sub-products are independent: each one becomes a
//! rayon task that builds its own operands and writes into its own slice of
//! a shared products buffer, and the level waits for all seven before
//! combining. Rayon's work-stealing keeps the nested waits deadlock-free on
//! any number of workers.

pub mod padding;

use std::borrow::Cow;

use rayon::prelude::*;

use crate::LEAF_SIZE;
use crate::error::{MatrixError, Result};
use crate::matrix::elementwise::{fast_add, fast_sub};
use crate::matrix::naive::naive_kernel;
use crate::matrix::{Matrix, multiply_naive};
use padding::{crop, join_quadrants, pad_to_aligned, split_quadrants};

/// Matrix product `A × B`.
///
/// Falls back to [`multiply_naive`] when any of `A.rows`, `A.cols`,
/// `B.cols` is below [`LEAF_SIZE`]; otherwise runs the padded Strassen
/// recursion. Transposed operands are fine.
///
/// # Errors
///
/// [`MatrixError::DimensionMismatch`] if `a.cols() != b.rows()`.
///
/// ```
/// use densemat::{Matrix, multiply};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
/// assert_eq!(multiply(&a, &b).unwrap().to_vec(), vec![19.0, 22.0, 43.0, 50.0]);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            left_cols: a.cols(),
            right_rows: b.rows(),
        });
    }

    if a.rows().min(a.cols()).min(b.cols()) < LEAF_SIZE {
        return multiply_naive(a, b);
    }

    let length = a.rows().max(a.cols()).max(b.cols());
    let a_padded = pad_to_aligned(a, length);
    let b_padded = pad_to_aligned(b, length);
    let product = strassen_recursive(&a_padded, &b_padded);
    Ok(crop(&product, a.rows(), b.cols()))
}

impl Matrix {
    /// Method form of [`multiply`].
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        multiply(self, other)
    }
}

/// Strassen product of two padded squares of the same side.
///
/// # Panics
///
/// Panics if either input is transposed, the two are not squares of the
/// same side, or the side does not halve evenly down to the leaf (that is,
/// it differs from [`padding::aligned_side`] of itself).
/// [`padding::pad_to_aligned`] always produces a valid side.
pub fn strassen_recursive(a: &Matrix, b: &Matrix) -> Matrix {
    assert!(
        !a.is_transposed() && !b.is_transposed(),
        "strassen operands must be untransposed"
    );
    assert!(
        a.is_square() && a.dims() == b.dims(),
        "strassen operands must be equal squares, got {}x{} and {}x{}",
        a.rows(),
        a.cols(),
        b.rows(),
        b.cols()
    );

    let side = a.rows();
    assert_eq!(
        side,
        padding::aligned_side(side),
        "strassen side {} does not halve evenly down to the leaf",
        side
    );
    let mut out = vec![0.0; side * side];
    strassen_into(a.as_slice(), b.as_slice(), side, &mut out);
    Matrix::from_parts(side, side, out)
}

/// One side of a Strassen sub-product: a quadrant as-is, or the sum or
/// difference of two quadrants.
enum Operand<'a> {
    Block(&'a [f64]),
    Sum(&'a [f64], &'a [f64]),
    Diff(&'a [f64], &'a [f64]),
}

impl Operand<'_> {
    fn resolve(&self) -> Cow<'_, [f64]> {
        match *self {
            Operand::Block(x) => Cow::Borrowed(x),
            Operand::Sum(x, y) => {
                let mut out = vec![0.0; x.len()];
                fast_add(x, y, &mut out);
                Cow::Owned(out)
            }
            Operand::Diff(x, y) => {
                let mut out = vec![0.0; x.len()];
                fast_sub(x, y, &mut out);
                Cow::Owned(out)
            }
        }
    }
}

/// Split a buffer into four equal consecutive parts.
fn quarters(buf: &mut [f64]) -> [&mut [f64]; 4] {
    let n = buf.len() / 4;
    let (x, rest) = buf.split_at_mut(n);
    let (y, rest) = rest.split_at_mut(n);
    let (z, w) = rest.split_at_mut(n);
    [x, y, z, w]
}

/// `i`-th block of `area` values.
fn block(buf: &[f64], i: usize, area: usize) -> &[f64] {
    &buf[i * area..(i + 1) * area]
}

/// `out = a × b` for `side × side` row-major buffers.
fn strassen_into(a: &[f64], b: &[f64], side: usize, out: &mut [f64]) {
    if side < LEAF_SIZE {
        naive_kernel(a, b, out, side, side, side);
        return;
    }

    let half = side / 2;
    let area = half * half;

    let mut lhs = vec![0.0; 4 * area];
    let mut rhs = vec![0.0; 4 * area];
    split_quadrants(a, half, quarters(&mut lhs));
    split_quadrants(b, half, quarters(&mut rhs));

    let (qa, qb, qc, qd) = (
        block(&lhs, 0, area),
        block(&lhs, 1, area),
        block(&lhs, 2, area),
        block(&lhs, 3, area),
    );
    let (qe, qf, qg, qh) = (
        block(&rhs, 0, area),
        block(&rhs, 1, area),
        block(&rhs, 2, area),
        block(&rhs, 3, area),
    );

    let plan = [
        (Operand::Sum(qa, qd), Operand::Sum(qe, qh)),  // P1 = (A+D)(E+H)
        (Operand::Block(qd), Operand::Diff(qg, qe)),   // P2 = D(G-E)
        (Operand::Sum(qa, qb), Operand::Block(qh)),    // P3 = (A+B)H
        (Operand::Diff(qb, qd), Operand::Sum(qg, qh)), // P4 = (B-D)(G+H)
        (Operand::Block(qa), Operand::Diff(qf, qh)),   // P5 = A(F-H)
        (Operand::Sum(qc, qd), Operand::Block(qe)),    // P6 = (C+D)E
        (Operand::Diff(qa, qc), Operand::Sum(qe, qf)), // P7 = (A-C)(E+F)
    ];

    let mut products = vec![0.0; 7 * area];
    products
        .par_chunks_exact_mut(area)
        .zip(plan.par_iter())
        .for_each(|(p, (l, r))| strassen_into(&l.resolve(), &r.resolve(), half, p));

    let (p1, p2, p3, p4, p5, p6, p7) = (
        block(&products, 0, area),
        block(&products, 1, area),
        block(&products, 2, area),
        block(&products, 3, area),
        block(&products, 4, area),
        block(&products, 5, area),
        block(&products, 6, area),
    );

    let mut c = vec![0.0; 4 * area];
    let mut t1 = vec![0.0; area];
    let mut t2 = vec![0.0; area];
    let [c11, c12, c21, c22] = quarters(&mut c);

    // C11 = P1 + P4 - P3 + P2
    fast_add(p1, p2, &mut t1);
    fast_sub(p4, p3, &mut t2);
    fast_add(&t1, &t2, c11);
    // C12 = P5 + P3
    fast_add(p5, p3, c12);
    // C21 = P2 + P6
    fast_add(p2, p6, c21);
    // C22 = P1 + P5 - P6 - P7
    fast_add(p1, p5, &mut t1);
    fast_add(p6, p7, &mut t2);
    fast_sub(&t1, &t2, c22);

    join_quadrants([&*c11, &*c12, &*c21, &*c22], half, out);
}
