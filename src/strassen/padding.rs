//! Padding to a recursion-friendly side and quadrant split/join.

use crate::LEAF_SIZE;
use crate::matrix::Matrix;

/// Side the Strassen recursion pads `length` up to.
///
/// Instead of the next power of two, pads to `base << count` with
/// `base <= LEAF_SIZE`: halve (rounding up) until the value fits under the
/// leaf size, then scale back. Every halving of the result down to the
/// leaf is then exact, and moderately sized inputs get much less padding.
///
/// ```
/// use densemat::strassen::padding::aligned_side;
///
/// assert_eq!(aligned_side(64), 64);
/// assert_eq!(aligned_side(101), 102);  // 51 << 1
/// assert_eq!(aligned_side(129), 132);  // 33 << 2
/// ```
pub fn aligned_side(length: usize) -> usize {
    let mut base = length;
    let mut count = 0;
    while base > LEAF_SIZE {
        base = base.div_ceil(2);
        count += 1;
    }
    base << count
}

/// Square zero matrix of side `aligned_side(target)` with `m` copied into
/// its top-left corner. The result is never transposed.
///
/// # Panics
///
/// Panics if `target` is smaller than either dimension of `m`.
pub fn pad_to_aligned(m: &Matrix, target: usize) -> Matrix {
    let (rows, cols) = m.dims();
    assert!(
        target >= rows && target >= cols,
        "padding target {} smaller than {}x{} matrix",
        target,
        rows,
        cols
    );

    let side = aligned_side(target);
    let src = m.row_major();
    let mut data = vec![0.0; side * side];
    for (dst_row, src_row) in data.chunks_exact_mut(side).zip(src.chunks_exact(cols)) {
        dst_row[..cols].copy_from_slice(src_row);
    }
    Matrix::from_parts(side, side, data)
}

/// Top-left `rows × cols` block of an untransposed matrix.
pub(crate) fn crop(m: &Matrix, rows: usize, cols: usize) -> Matrix {
    debug_assert!(!m.is_transposed());
    debug_assert!(rows <= m.rows() && cols <= m.cols());

    let width = m.cols();
    let mut data = Vec::with_capacity(rows * cols);
    for src_row in m.as_slice().chunks_exact(width).take(rows) {
        data.extend_from_slice(&src_row[..cols]);
    }
    Matrix::from_parts(rows, cols, data)
}

/// Copy the four `half × half` quadrants of a `2·half` square row-major
/// buffer into `q11, q12, q21, q22`.
pub(crate) fn split_quadrants(src: &[f64], half: usize, q: [&mut [f64]; 4]) {
    let side = 2 * half;
    debug_assert_eq!(src.len(), side * side);
    let [q11, q12, q21, q22] = q;

    for i in 0..half {
        let top = &src[i * side..(i + 1) * side];
        let bottom = &src[(i + half) * side..(i + half + 1) * side];
        let dst = i * half..(i + 1) * half;

        q11[dst.clone()].copy_from_slice(&top[..half]);
        q12[dst.clone()].copy_from_slice(&top[half..]);
        q21[dst.clone()].copy_from_slice(&bottom[..half]);
        q22[dst].copy_from_slice(&bottom[half..]);
    }
}

/// Inverse of [`split_quadrants`]: place four `half × half` blocks into a
/// `2·half` square row-major buffer.
pub(crate) fn join_quadrants(q: [&[f64]; 4], half: usize, dst: &mut [f64]) {
    let side = 2 * half;
    debug_assert_eq!(dst.len(), side * side);
    let [q11, q12, q21, q22] = q;

    for i in 0..half {
        let src = i * half..(i + 1) * half;
        let (top, bottom) = dst.split_at_mut((i + half) * side);
        let top = &mut top[i * side..(i + 1) * side];
        let bottom = &mut bottom[..side];

        top[..half].copy_from_slice(&q11[src.clone()]);
        top[half..].copy_from_slice(&q12[src.clone()]);
        bottom[..half].copy_from_slice(&q21[src.clone()]);
        bottom[half..].copy_from_slice(&q22[src]);
    }
}

/// Split a square, even-sided, untransposed matrix into
/// `(Q11, Q12, Q21, Q22)`.
///
/// # Panics
///
/// Panics if `m` is transposed, not square, or has an odd side. Only
/// matrices produced by [`pad_to_aligned`] (or its recursive halves) are
/// valid input.
pub fn quadrants(m: &Matrix) -> (Matrix, Matrix, Matrix, Matrix) {
    assert!(!m.is_transposed(), "quadrants of a transposed matrix");
    assert!(
        m.is_square() && m.rows() % 2 == 0,
        "quadrants need an even square matrix, got {}x{}",
        m.rows(),
        m.cols()
    );

    let half = m.rows() / 2;
    let area = half * half;
    let mut q = [vec![0.0; area], vec![0.0; area], vec![0.0; area], vec![0.0; area]];
    {
        let [q11, q12, q21, q22] = &mut q;
        split_quadrants(
            m.as_slice(),
            half,
            [
                q11.as_mut_slice(),
                q12.as_mut_slice(),
                q21.as_mut_slice(),
                q22.as_mut_slice(),
            ],
        );
    }

    let [q11, q12, q21, q22] = q;
    (
        Matrix::from_parts(half, half, q11),
        Matrix::from_parts(half, half, q12),
        Matrix::from_parts(half, half, q21),
        Matrix::from_parts(half, half, q22),
    )
}

/// Join four equal `L × L` blocks into one `2L × 2L` matrix.
///
/// Transposed blocks are materialized first.
///
/// # Panics
///
/// Panics if the blocks are not all square with the same side.
pub fn combine(c11: &Matrix, c12: &Matrix, c21: &Matrix, c22: &Matrix) -> Matrix {
    let half = c11.rows();
    for block in [c11, c12, c21, c22] {
        assert!(
            block.dims() == (half, half),
            "combine needs four {}x{} blocks, got {}x{}",
            half,
            half,
            block.rows(),
            block.cols()
        );
    }

    let side = 2 * half;
    let (b11, b12, b21, b22) = (
        c11.row_major(),
        c12.row_major(),
        c21.row_major(),
        c22.row_major(),
    );
    let mut data = vec![0.0; side * side];
    join_quadrants([&*b11, &*b12, &*b21, &*b22], half, &mut data);
    Matrix::from_parts(side, side, data)
}
