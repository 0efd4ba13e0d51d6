//! Explicitly sized parallel execution.
//!
//! The Strassen multiplier already fans out on rayon's global pool. This
//! module runs it on a pool the caller sizes instead, scaled down for
//! problems too small to use every worker.

pub mod pool;

pub use pool::multiply_parallel;
