//! Demo workload benchmark suite
//!
//! Criterion versions of the dashboard's demo benchmarks:
//! - List and map construction/search
//! - Arithmetic over 100/1000/5000 random numbers
//! - String join/split/upper/replace
//! - Heap-footprint builders

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use demo_benchmarks::suites::data_structure::DataStructureSuite;
use demo_benchmarks::suites::math::{MathSuite, PARAMS};
use demo_benchmarks::suites::memory;
use demo_benchmarks::suites::string::StringSuite;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Benchmark list and map operations
fn bench_data_structures(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_structure");

    // Fixed seed so search keys are stable across runs
    let suite = DataStructureSuite::setup(&mut ChaCha8Rng::seed_from_u64(0));

    group.bench_function("list_creation", |bencher| {
        bencher.iter(|| black_box(&suite).list_creation())
    });
    group.bench_function("dict_creation", |bencher| {
        bencher.iter(|| black_box(&suite).dict_creation())
    });
    group.bench_function("list_search", |bencher| {
        bencher.iter(|| black_box(&suite).list_search())
    });
    group.bench_function("dict_search", |bencher| {
        bencher.iter(|| black_box(&suite).dict_search())
    });
    group.bench_function("list_append", |bencher| {
        bencher.iter(|| black_box(&suite).list_append())
    });
    group.bench_function("list_extend", |bencher| {
        bencher.iter(|| black_box(&suite).list_extend())
    });

    group.finish();
}

/// Benchmark arithmetic at each input size
fn bench_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("math");
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for size in PARAMS {
        let suite = MathSuite::setup(size, &mut rng);

        group.bench_with_input(BenchmarkId::new("sum_builtin", size), &suite, |bencher, s| {
            bencher.iter(|| black_box(s).sum_builtin())
        });
        group.bench_with_input(BenchmarkId::new("sum_manual", size), &suite, |bencher, s| {
            bencher.iter(|| black_box(s).sum_manual())
        });
        group.bench_with_input(
            BenchmarkId::new("sqrt_operations", size),
            &suite,
            |bencher, s| bencher.iter(|| black_box(s).sqrt_operations()),
        );
        group.bench_with_input(
            BenchmarkId::new("pow_operations", size),
            &suite,
            |bencher, s| bencher.iter(|| black_box(s).pow_operations()),
        );
    }

    group.finish();
}

/// Benchmark string processing over 400 words
fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("string");
    let suite = StringSuite::setup();

    group.bench_function("join", |bencher| {
        bencher.iter(|| black_box(&suite).string_join())
    });
    group.bench_function("split", |bencher| {
        bencher.iter(|| black_box(&suite).string_split().len())
    });
    group.bench_function("upper", |bencher| {
        bencher.iter(|| black_box(&suite).string_upper())
    });
    group.bench_function("replace", |bencher| {
        bencher.iter(|| black_box(&suite).string_replace())
    });

    group.finish();
}

/// Benchmark the allocation cost behind the memory workloads
fn bench_memory_builders(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory");

    group.bench_function("small_list", |bencher| bencher.iter(memory::mem_small_list));
    group.bench_function("large_list", |bencher| bencher.iter(memory::mem_large_list));
    group.bench_function("dict_small", |bencher| bencher.iter(memory::mem_dict_small));
    group.bench_function("dict_large", |bencher| bencher.iter(memory::mem_dict_large));
    group.bench_function("nested_structure", |bencher| {
        bencher.iter(memory::mem_nested_structure)
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_data_structures,
    bench_math,
    bench_strings,
    bench_memory_builders
);
criterion_main!(benches);
