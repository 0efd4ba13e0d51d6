//! The dense matrix type and everything that works on it directly.
//!
//! Storage, elementwise algebra and the naive multiplier live here; the
//! Strassen multiplier builds on top of them.

pub mod dense;
pub mod display;
pub mod elementwise;
pub mod naive;
pub mod ops;
pub mod transpose;

pub use dense::Matrix;
pub use naive::multiply_naive;
