use locality::{
    BenchConfig, LocalityError, Matrix, Slowdown, generate_seeded, run, sum_column_major,
    sum_row_major,
};

fn assert_sums_agree(m: &Matrix, name: &str) {
    let row = sum_row_major(m);
    let col = sum_column_major(m);
    assert_eq!(row, col, "{}: row-major {} vs column-major {}", name, row, col);

    let reference: i64 = m.as_slice().iter().map(|&v| v as i64).sum();
    assert_eq!(row, reference, "{}: sum does not match flat sum", name);
}

// ============================================================
// Summation order independence
// ============================================================

#[test]
fn test_3x3_known_values() {
    let m = Matrix::from_vec(3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();

    assert_eq!(sum_row_major(&m), 45);
    assert_eq!(sum_column_major(&m), 45);
}

#[test]
fn test_1x1() {
    let m = Matrix::from_vec(1, vec![-17]).unwrap();
    assert_sums_agree(&m, "1x1");
    assert_eq!(sum_row_major(&m), -17);
}

#[test]
fn test_asymmetric_matrix() {
    // Transposing would change which elements a wrong index formula picks up.
    let m = Matrix::from_vec(2, vec![1, 100, 10_000, 1_000_000]).unwrap();
    assert_sums_agree(&m, "asymmetric");
    assert_eq!(sum_column_major(&m), 1_010_101);
}

#[test]
fn test_random_sizes() {
    let test_sizes = [2, 3, 5, 7, 16, 17, 63, 64, 65, 200];

    for (seed, size) in test_sizes.into_iter().enumerate() {
        let m = generate_seeded(size, 0, 100, Some(seed as u64)).unwrap();
        assert_sums_agree(&m, &format!("random_{}", size));
    }
}

#[test]
fn test_negative_values() {
    let m = generate_seeded(50, -1000, 1000, Some(3)).unwrap();
    assert_sums_agree(&m, "negative");
}

// ============================================================
// Accumulator width
// ============================================================

#[test]
fn test_sum_exceeds_i32() {
    let size = 64;
    let m = Matrix::from_vec(size, vec![i32::MAX; size * size]).unwrap();

    let expected = i32::MAX as i64 * (size * size) as i64;
    assert_eq!(sum_row_major(&m), expected);
    assert_eq!(sum_column_major(&m), expected);
}

// ============================================================
// Harness
// ============================================================

#[test]
fn test_500_single_run() {
    let config = BenchConfig {
        size: 500,
        runs: 1,
        seed: Some(11),
        ..BenchConfig::default()
    };
    let mut out = Vec::new();
    let result = run(&config, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.matches("  Run 1:").count(), 2);
    assert!(!text.contains("Run 2:"));

    assert_eq!(result.row_major.samples.len(), 1);
    assert_eq!(result.column_major.samples.len(), 1);
    assert_eq!(result.row_major.average(), result.row_major.samples[0]);
    assert_eq!(result.column_major.average(), result.column_major.samples[0]);

    let avg_line = format!("Average Row-Major Time: {:.6} seconds", result.row_major.samples[0]);
    assert!(text.contains(&avg_line), "missing {:?}", avg_line);
}

#[test]
fn test_harness_checksums_match_generated_matrix() {
    let config = BenchConfig {
        size: 128,
        runs: 2,
        seed: Some(2024),
        ..BenchConfig::default()
    };
    let m = generate_seeded(config.size, config.low, config.high, config.seed).unwrap();

    let result = run(&config, &mut Vec::new()).unwrap();

    assert_eq!(result.row_major.checksum, sum_row_major(&m));
    assert_eq!(result.column_major.checksum, sum_row_major(&m));
}

#[test]
fn test_harness_slowdown_is_consistent_with_averages() {
    let config = BenchConfig {
        size: 300,
        runs: 3,
        seed: Some(5),
        ..BenchConfig::default()
    };
    let result = run(&config, &mut Vec::new()).unwrap();

    let row = result.row_major.average();
    let col = result.column_major.average();
    assert!(row >= 0.0 && row.is_finite());
    assert!(col >= 0.0 && col.is_finite());

    match result.slowdown {
        Slowdown::Measured(ratio) => assert!((ratio - col / row).abs() < 1e-9),
        Slowdown::Unmeasurable => assert!(row < locality::MIN_MEASURABLE_SECS),
    }
}

#[test]
fn test_harness_rejects_zero_size_without_output() {
    let config = BenchConfig {
        size: 0,
        ..BenchConfig::default()
    };
    let mut out = Vec::new();
    let err = run(&config, &mut out).unwrap_err();

    assert!(matches!(err, LocalityError::InvalidArgument { name: "size", value: 0 }));
    assert!(out.is_empty());
}
