/// Side of the square tiles used when transposing a physical buffer.
const TILE: usize = 32;

/// Transpose a row-major buffer into a freshly allocated one.
///
/// `src` is `rows × cols` row-major; the returned buffer is `cols × rows`
/// row-major, so what was column j of `src` becomes row j of the result.
/// Works tile by tile so both the reads and the writes stay inside a few
/// cache lines for large buffers.
///
/// # Example
///
/// ```
/// use densemat::matrix::transpose::transposed_buffer;
///
/// let src = vec![1.0, 2.0, 3.0,   // 2×3
///                4.0, 5.0, 6.0];
///
/// assert_eq!(transposed_buffer(&src, 2, 3),
///            vec![1.0, 4.0,       // 3×2
///                 2.0, 5.0,
///                 3.0, 6.0]);
/// ```
///
/// # Panics
///
/// Panics if `src.len() != rows * cols`.
pub fn transposed_buffer(src: &[f64], rows: usize, cols: usize) -> Vec<f64> {
    assert_eq!(
        src.len(),
        rows * cols,
        "src: expected {}x{}={} elements",
        rows,
        cols,
        rows * cols
    );

    let mut dst = vec![0.0; rows * cols];
    for ii in (0..rows).step_by(TILE) {
        let i_end = (ii + TILE).min(rows);
        for jj in (0..cols).step_by(TILE) {
            let j_end = (jj + TILE).min(cols);
            for i in ii..i_end {
                for j in jj..j_end {
                    dst[j * rows + i] = src[i * cols + j];
                }
            }
        }
    }
    dst
}
