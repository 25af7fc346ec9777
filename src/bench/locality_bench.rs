//! Criterion benchmark of the two traversal orders.
//!
//! Small sizes fit in L1/L2 and show little difference; the gap opens once
//! a single column walk touches more cache lines than the cache holds.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use locality::{generate_seeded, sum_column_major, sum_row_major};

fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_sum");
    group.sample_size(20);

    for &size in &[256usize, 1024, 2048] {
        let m = generate_seeded(size, 0, 100, Some(42)).expect("matrix");
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("row_major", size), &m, |b, m| {
            b.iter(|| sum_row_major(black_box(m)))
        });
        group.bench_with_input(BenchmarkId::new("column_major", size), &m, |b, m| {
            b.iter(|| sum_column_major(black_box(m)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_traversals);
criterion_main!(benches);
