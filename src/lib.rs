//! Dense `f64` matrix algebra with a parallel Strassen multiplier.
//!
//! A [`Matrix`] owns one flat buffer and transposes in O(1) by flipping a
//! flag. On top of that sit elementwise algebra, a naive triple-loop
//! multiplier, a Strassen multiplier that fans its seven sub-products out
//! over rayon, and integer powers by repeated squaring.
//!
//! ## Usage
//!
//! ```
//! use densemat::{Matrix, multiply, multiply_naive};
//!
//! let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(c, multiply_naive(&a, &b).unwrap());
//! assert_eq!(c.to_vec(), vec![19.0, 22.0, 43.0, 50.0]);
//! assert_eq!(a.add(&b).unwrap().to_vec(), vec![6.0, 8.0, 10.0, 12.0]);
//! ```
//!
//! Big products go through Strassen automatically. To bound the number of
//! worker threads, use the pooled version:
//!
//! ```
//! use densemat::{Matrix, multiply_parallel};
//!
//! let a = Matrix::identity(256).unwrap();
//! let b = Matrix::identity(256).unwrap();
//!
//! let c = multiply_parallel(&a, &b, 4).unwrap();
//! assert_eq!(c, a);
//! ```
//!
//! ## What's inside
//!
//! - Lazy transpose with transpose-aware indexing everywhere
//! - Padding to `base · 2^k` (`base <= LEAF_SIZE`) instead of the next power of two
//! - Seven-way fork-join per recursion level, naive kernel at the leaves
//! - Adaptive pool sizing for explicitly threaded runs

pub mod error;
pub mod matrix;
pub mod power;
pub mod strassen;
pub mod threaded;

pub use error::{MatrixError, Result};
pub use matrix::{Matrix, multiply_naive};
pub use power::power;
pub use strassen::multiply;
pub use threaded::multiply_parallel;

/// Side length below which multiplication uses the naive kernel.
///
/// Smaller values mean more, smaller parallel tasks; larger values mean
/// fewer leaves dominated by the O(n³) loop.
pub const LEAF_SIZE: usize = 64;
