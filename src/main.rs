//! Benchmark runner comparing the naive and Strassen multipliers.

use densemat::{Matrix, Result, multiply, multiply_naive, multiply_parallel};
use std::time::Instant;

fn main() -> Result<()> {
    println!("=== Dense Matrix Multiplication Benchmark ===\n");

    let sizes = [128, 256, 511];
    let iterations = 3;
    let threads = std::thread::available_parallelism().map_or(1, |n| n.get());
    let mut all_results = Vec::new();

    println!("Leaf size: {}, worker threads: {}\n", densemat::LEAF_SIZE, threads);

    for &size in &sizes {
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(50));

        let a = Matrix::from_vec(size, size, (0..size * size).map(|i| (i % 100) as f64).collect())?;
        let b = Matrix::from_vec(size, size, (0..size * size).map(|i| (i % 97) as f64).collect())?;

        let results: Vec<(&str, (f64, f64))> = vec![
            ("Naive (i-j-k)", bench_fn(&a, &b, iterations, multiply_naive)?),
            ("Strassen", bench_fn(&a, &b, iterations, multiply)?),
            (
                "Strassen 1 thread",
                bench_fn(&a, &b, iterations, |a, b| multiply_parallel(a, b, 1))?,
            ),
        ];

        let baseline_time = results[0].1.0;
        for (i, (name, (time_ms, gflops))) in results.iter().enumerate() {
            let speedup = baseline_time / time_ms;
            println!(
                "{}. {:18} {:8.2} ms  {:6.2} GFLOPS  ({:.1}×)",
                i + 1,
                name,
                time_ms,
                gflops,
                speedup
            );
        }
        println!();

        all_results.push((size, results));
    }

    print_summary_table(&all_results);
    Ok(())
}

/// Average wall time in ms and nominal GFLOPS (2·n³) of `f` on `a × b`.
fn bench_fn<F>(a: &Matrix, b: &Matrix, iterations: usize, f: F) -> Result<(f64, f64)>
where
    F: Fn(&Matrix, &Matrix) -> Result<Matrix>,
{
    // Warmup
    f(a, b)?;

    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        f(a, b)?;
        total += start.elapsed().as_secs_f64();
    }

    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    let avg = total / iterations as f64;
    let gflops = 2.0 * (m * n * k) as f64 / avg / 1e9;
    Ok((avg * 1000.0, gflops))
}

#[allow(clippy::type_complexity)]
fn print_summary_table(all_results: &[(usize, Vec<(&str, (f64, f64))>)]) {
    println!("\n{}", "=".repeat(80));
    println!("SUMMARY");
    println!("{}", "=".repeat(80));

    print!("\n{:<20}", "Method");
    for (size, _) in all_results {
        print!(" {:>14}", format!("{}×{}", size, size));
    }
    println!(" {:>10}", "Speedup");
    println!("{}", "-".repeat(80));

    let num_methods = all_results[0].1.len();

    for method_idx in 0..num_methods {
        let method_name = all_results[0].1[method_idx].0;
        print!("{:<20}", method_name);

        let mut speedups = Vec::new();
        for (_, results) in all_results {
            let (time_ms, gflops) = results[method_idx].1;
            speedups.push(results[0].1.0 / time_ms);
            print!(" {:>11.2} GF", gflops);
        }

        let avg_speedup: f64 = speedups.iter().sum::<f64>() / speedups.len() as f64;
        println!(" {:>9.1}×", avg_speedup);
    }

    println!("{}", "=".repeat(80));
    println!("\nGF = GFLOPS (nominal 2·n³ operations per second)");
    println!("Speedup relative to Naive (i-j-k). Higher is better.\n");
}
