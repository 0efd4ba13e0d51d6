//! Human-readable rendering.

use std::fmt;

use super::dense::Matrix;

/// Dimensions longer than this are truncated when printed.
pub const DISPLAY_LIMIT: usize = 53;

/// Leading and trailing indices kept along a truncated dimension.
pub const DISPLAY_EDGE: usize = 3;

/// Indices to print along a dimension of `len`, plus the position after
/// which the `...` gap goes.
fn shown(len: usize) -> (Vec<usize>, Option<usize>) {
    if len > DISPLAY_LIMIT {
        let idx = (0..DISPLAY_EDGE).chain(len - DISPLAY_EDGE..len).collect();
        (idx, Some(DISPLAY_EDGE - 1))
    } else {
        ((0..len).collect(), None)
    }
}

/// One bracketed row per line, six decimals per value:
///
/// ```
/// use densemat::Matrix;
///
/// let m = Matrix::from_rows(&[[1.0, 2.5], [3.0, 4.0]]).unwrap();
/// assert_eq!(m.to_string(), "[1.000000, 2.500000]\n[3.000000, 4.000000]\n");
/// ```
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, row_gap) = shown(self.rows());
        let (cols, col_gap) = shown(self.cols());

        for &r in &rows {
            f.write_str("[")?;
            for (i, &c) in cols.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{:.6}", self.at(r, c))?;
                if col_gap == Some(c) {
                    f.write_str(", ...")?;
                }
            }
            f.write_str("]\n")?;
            if row_gap == Some(r) {
                f.write_str("...\n")?;
            }
        }
        Ok(())
    }
}
