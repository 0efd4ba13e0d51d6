//! Strassen multiplication on a dedicated, sized worker pool.

use rayon::ThreadPoolBuilder;

use crate::LEAF_SIZE;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::strassen::multiply;
use crate::strassen::padding::aligned_side;

/// Same as [`multiply`] but runs on its own pool of at most `num_threads`
/// workers instead of rayon's global one.
///
/// Thread count adapts to the problem: below the leaf size there is no
/// fan-out, so one thread; otherwise no more than the number of leaf tasks
/// the recursion can produce. `num_threads == 0` means one per available
/// core.
///
/// # Errors
///
/// Everything [`multiply`] returns, plus [`MatrixError::ThreadPool`] if the
/// pool cannot be started.
///
/// [`MatrixError::ThreadPool`]: crate::MatrixError::ThreadPool
pub fn multiply_parallel(a: &Matrix, b: &Matrix, num_threads: usize) -> Result<Matrix> {
    let max_threads = if num_threads == 0 {
        std::thread::available_parallelism().map_or(1, |n| n.get())
    } else {
        num_threads
    };
    let effective_threads = choose_thread_count(a.rows(), b.cols(), a.cols(), max_threads);

    let pool = ThreadPoolBuilder::new()
        .num_threads(effective_threads)
        .build()?;
    pool.install(|| multiply(a, b))
}

/// Workers worth starting for an `m × k` by `k × n` product.
fn choose_thread_count(m: usize, n: usize, k: usize, max_threads: usize) -> usize {
    if m.min(n).min(k) < LEAF_SIZE {
        return 1;
    }

    // Each recursion level above the leaf multiplies the task count by 7.
    let mut side = aligned_side(m.max(n).max(k));
    let mut tasks: usize = 1;
    while side >= LEAF_SIZE {
        side /= 2;
        tasks = tasks.saturating_mul(7);
    }

    tasks.min(max_threads).max(1)
}
