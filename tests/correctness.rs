use densemat::strassen::padding::{combine, pad_to_aligned, quadrants};
use densemat::strassen::strassen_recursive;
use densemat::{LEAF_SIZE, Matrix, MatrixError, multiply, multiply_naive, multiply_parallel, power};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_matrices_equal(expected: &Matrix, actual: &Matrix, name: &str) {
    assert_eq!(expected.dims(), actual.dims(), "{}: shape mismatch", name);
    let expected = expected.to_vec();
    let actual = actual.to_vec();
    for i in 0..expected.len() {
        assert!(
            (expected[i] - actual[i]).abs() < 1e-8,
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            expected[i],
            actual[i]
        );
    }
}

fn patterned(rows: usize, cols: usize) -> Matrix {
    Matrix::from_vec(rows, cols, (0..rows * cols).map(|i| (i % 10) as f64).collect()).unwrap()
}

fn random(rows: usize, cols: usize, rng: &mut StdRng) -> Matrix {
    let data = (0..rows * cols).map(|_| rng.gen_range(-1.0..1.0)).collect();
    Matrix::from_vec(rows, cols, data).unwrap()
}

// ============================================================
// Worked example
// ============================================================

#[test]
fn test_2x2_example() {
    let mut a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
    let expected = Matrix::from_rows(&[[19.0, 22.0], [43.0, 50.0]]).unwrap();

    assert_eq!(multiply_naive(&a, &b).unwrap(), expected);
    assert_eq!(multiply(&a, &b).unwrap(), expected);
    assert_eq!(
        a.add(&b).unwrap(),
        Matrix::from_rows(&[[6.0, 8.0], [10.0, 12.0]]).unwrap()
    );
    assert_eq!(a.transpose().get(0, 1).unwrap(), 3.0);
}

// ============================================================
// Leaf threshold boundaries
// ============================================================

#[test]
fn test_sizes_around_leaf() {
    let sizes = [
        LEAF_SIZE - 1,
        LEAF_SIZE,
        LEAF_SIZE + 1,
        2 * LEAF_SIZE,
        LEAF_SIZE + 37,
    ];

    for size in sizes {
        let a = patterned(size, size);
        let b = patterned(size, size);

        let c_naive = multiply_naive(&a, &b).unwrap();
        let c_fast = multiply(&a, &b).unwrap();

        assert_matrices_equal(&c_naive, &c_fast, &format!("size_{}", size));
    }
}

#[test]
fn test_random_sizes_around_leaf() {
    let mut rng = StdRng::seed_from_u64(7);

    for size in [LEAF_SIZE - 1, LEAF_SIZE, LEAF_SIZE + 1, 2 * LEAF_SIZE, LEAF_SIZE + 37] {
        let a = random(size, size, &mut rng);
        let b = random(size, size, &mut rng);

        assert_matrices_equal(
            &multiply_naive(&a, &b).unwrap(),
            &multiply(&a, &b).unwrap(),
            &format!("random_size_{}", size),
        );
    }
}

#[test]
fn test_two_recursion_levels() {
    // 4 * LEAF_SIZE + 3 pads to 260 and recurses through 130 and 65
    let size = 4 * LEAF_SIZE + 3;
    let mut rng = StdRng::seed_from_u64(11);
    let a = random(size, size, &mut rng);
    let b = random(size, size, &mut rng);

    assert_matrices_equal(
        &multiply_naive(&a, &b).unwrap(),
        &multiply(&a, &b).unwrap(),
        "two_levels",
    );
}

// ============================================================
// Non-square matrix tests
// ============================================================

#[test]
fn test_non_square_matrices() {
    let test_cases = [
        (64, 128, 96),  // wide result
        (128, 64, 96),  // tall result
        (100, 75, 150), // odd sizes
        (80, 80, 200),  // deep inner dimension
        (13, 17, 19),   // below leaf
        (200, 3, 200),  // thin inner dimension
    ];

    for (m, n, k) in test_cases {
        let a = patterned(m, k);
        let b = patterned(k, n);

        let c_naive = multiply_naive(&a, &b).unwrap();
        let c_fast = multiply(&a, &b).unwrap();

        assert_eq!(c_fast.dims(), (m, n));
        assert_matrices_equal(&c_naive, &c_fast, &format!("non_square_{}x{}x{}", m, n, k));
    }
}

#[test]
fn test_transposed_operands() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut a = random(90, 70, &mut rng);
    let mut b = random(90, 70, &mut rng);
    a.transpose(); // 70 × 90

    // A^T × B against a materialized copy of A^T
    let a_t = Matrix::from_vec(70, 90, a.to_vec()).unwrap();
    assert_matrices_equal(
        &multiply(&a_t, &b).unwrap(),
        &multiply(&a, &b).unwrap(),
        "transposed_lhs",
    );

    b.transpose(); // 70 × 90, no longer compatible
    assert!(matches!(
        multiply(&a, &b),
        Err(MatrixError::DimensionMismatch {
            left_cols: 90,
            right_rows: 70
        })
    ));
}

// ============================================================
// Padding pipeline
// ============================================================

#[test]
fn test_manual_pipeline_matches_multiply() {
    let (m, k, n) = (70, 100, 90);
    let a = patterned(m, k);
    let b = patterned(k, n);

    let a_padded = pad_to_aligned(&a, 100);
    let b_padded = pad_to_aligned(&b, 100);
    assert_eq!(a_padded.dims(), (100, 100));

    let product = strassen_recursive(&a_padded, &b_padded);
    let expected = multiply(&a, &b).unwrap();
    for r in 0..m {
        for c in 0..n {
            assert!((product.get(r, c).unwrap() - expected.get(r, c).unwrap()).abs() < 1e-8);
        }
    }
}

#[test]
fn test_quadrant_products_combine() {
    // Block-wise product of quadrants recombines to the full product
    let size = 2 * LEAF_SIZE;
    let mut rng = StdRng::seed_from_u64(5);
    let x = random(size, size, &mut rng);
    let y = random(size, size, &mut rng);

    let (a, b, c, d) = quadrants(&x);
    let (e, f, g, h) = quadrants(&y);
    let block = |p: &Matrix, q: &Matrix, r: &Matrix, s: &Matrix| {
        multiply(p, q).unwrap().add(&multiply(r, s).unwrap()).unwrap()
    };
    let joined = combine(
        &block(&a, &e, &b, &g),
        &block(&a, &f, &b, &h),
        &block(&c, &e, &d, &g),
        &block(&c, &f, &d, &h),
    );

    assert_matrices_equal(&multiply_naive(&x, &y).unwrap(), &joined, "quadrant_blocks");
}

// ============================================================
// Error paths
// ============================================================

#[test]
fn test_error_kinds() {
    let a = Matrix::new(2, 3).unwrap();
    let b = Matrix::new(4, 2).unwrap();

    assert!(matches!(
        multiply(&a, &b),
        Err(MatrixError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        multiply_naive(&a, &b),
        Err(MatrixError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        a.get(2, 0),
        Err(MatrixError::IndexOutOfRange { .. })
    ));
    assert!(matches!(
        a.get(0, 3),
        Err(MatrixError::IndexOutOfRange { .. })
    ));
    assert!(matches!(a.add(&b), Err(MatrixError::ShapeMismatch { .. })));
    assert!(matches!(power(&a, 2), Err(MatrixError::NotSquare { .. })));
    assert!(matches!(
        power(&Matrix::identity(2).unwrap(), -3),
        Err(MatrixError::Unsupported(_))
    ));
    assert!(matches!(
        Matrix::new(0, 0),
        Err(MatrixError::InvalidDimension { .. })
    ));
}

#[test]
fn test_error_messages() {
    let err = multiply(&Matrix::new(2, 3).unwrap(), &Matrix::new(4, 2).unwrap()).unwrap_err();
    assert_eq!(err.to_string(), "Dimensions of 3 and 4 do not match");

    let err = Matrix::new(3, 3).unwrap().get(3, 0).unwrap_err();
    assert!(err.to_string().contains("out of bounds"));
}

// ============================================================
// Powers and explicit pools
// ============================================================

#[test]
fn test_power_large_base_uses_strassen() {
    let size = LEAF_SIZE + 10;
    let mut rng = StdRng::seed_from_u64(13);
    let m = random(size, size, &mut rng).scale(0.1);

    let mut expected = Matrix::identity(size).unwrap();
    for _ in 0..5 {
        expected = multiply_naive(&expected, &m).unwrap();
    }

    assert_matrices_equal(&expected, &power(&m, 5).unwrap(), "power_5");
}

#[test]
fn test_parallel_matches_global_pool() {
    let test_sizes = [LEAF_SIZE, 2 * LEAF_SIZE, 3 * LEAF_SIZE + 1];

    for size in test_sizes {
        let a = Matrix::from_vec(size, size, (0..size * size).map(|i| (i % 17) as f64).collect())
            .unwrap();
        let b = Matrix::from_vec(size, size, (0..size * size).map(|i| (i % 13) as f64).collect())
            .unwrap();

        let c_global = multiply(&a, &b).unwrap();
        let c_pool = multiply_parallel(&a, &b, 3).unwrap();

        // same plan, same arithmetic: scheduling must not change the result
        assert_eq!(c_global, c_pool, "parallel_size_{}", size);
    }
}

#[test]
fn test_results_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(17);
    let a = random(150, 150, &mut rng);
    let b = random(150, 150, &mut rng);

    let first = multiply(&a, &b).unwrap();
    for _ in 0..3 {
        assert_eq!(first, multiply(&a, &b).unwrap());
    }
}
