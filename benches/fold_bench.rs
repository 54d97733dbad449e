//! Benchmark for folds and searches over heterogeneous tuples.
//!
//! Compares the dispatched algorithms with the hand-written code they
//! should compile down to.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use polytag::datatype::{N3, N7, Str, range};
use polytag::interop::VecTag;
use polytag::typeclass::{any_of, equal, equal_to, fold_left, less, sum, to_vec};
use polytag::{text, tuple};
use std::hint::black_box;

// =============================================================================
// Fold Benchmarks
// =============================================================================

fn benchmark_tuple_fold(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("tuple_fold");

    group.bench_function("fold_left_8", |bencher| {
        bencher.iter(|| {
            let values = black_box(tuple!(1u64, 2u64, 3u64, 4u64, 5u64, 6u64, 7u64, 8u64));
            fold_left(values, 0u64, |total: u64, value: u64| total + value)
        });
    });

    // Baseline: the same sum over a standard tuple
    group.bench_function("handwritten_8", |bencher| {
        bencher.iter(|| {
            let (a, b, c, d, e, f, g, h) =
                black_box((1u64, 2u64, 3u64, 4u64, 5u64, 6u64, 7u64, 8u64));
            a + b + c + d + e + f + g + h
        });
    });

    group.bench_function("sum_range", |bencher| {
        bencher.iter(|| black_box(range(N3, N7)).iter().sum::<usize>());
    });

    group.finish();
}

fn benchmark_vec_fold(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("vec_fold");

    for size in [16, 256, 4096] {
        let values: Vec<u64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("sum", size), &values, |bencher, values| {
            bencher.iter(|| sum::<u64, _>(black_box(values.clone())));
        });
        group.bench_with_input(BenchmarkId::new("iterator_sum", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values.clone()).into_iter().sum::<u64>());
        });
    }

    group.finish();
}

// =============================================================================
// Search Benchmarks
// =============================================================================

fn benchmark_search(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("search");

    group.bench_function("tuple_any_of_runtime", |bencher| {
        bencher.iter(|| {
            let values = black_box(tuple!(1i32, 5i32, 9i32, 13i32, 17i32));
            any_of(values, equal_to(black_box(13i32)))
        });
    });

    group.bench_function("tuple_any_of_constant", |bencher| {
        bencher.iter(|| any_of(black_box(tuple!(true, 'x', N3, 2.5f64)), equal_to(N3)));
    });

    group.finish();
}

// =============================================================================
// String Benchmarks
// =============================================================================

const WORDS: [Str; 4] = [
    text!("alpha"),
    text!("alphabet"),
    text!("beta"),
    text!("betamax"),
];

fn benchmark_strings(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("strings");

    group.bench_function("less", |bencher| {
        bencher.iter(|| {
            WORDS
                .windows(2)
                .filter(|pair| less(black_box(&pair[0]), black_box(&pair[1])))
                .count()
        });
    });

    group.bench_function("equal", |bencher| {
        bencher.iter(|| equal(black_box(&WORDS[1]), black_box(&"alphabet")));
    });

    group.bench_function("to_vec_chars", |bencher| {
        bencher.iter(|| polytag::dispatch::to::<VecTag, _>(black_box(WORDS[3])));
    });

    group.bench_function("to_vec_tuple", |bencher| {
        bencher.iter(|| to_vec(black_box(tuple!('a', 'b', 'c'))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_tuple_fold,
    benchmark_vec_fold,
    benchmark_search,
    benchmark_strings
);
criterion_main!(benches);
