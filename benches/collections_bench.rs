//! Benchmarks for the three container kinds and the shared algebra.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use orderly::{Collection, Dictionary, OrderedList, UniqueSet};
use std::hint::black_box;

// =============================================================================
// OrderedList push / unset
// =============================================================================

fn benchmark_list_push(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("list_push");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("OrderedList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = OrderedList::new();
                    for index in 0..size {
                        list.push(black_box(index));
                    }
                    black_box(list)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// UniqueSet add (deduplicating insert)
// =============================================================================

fn benchmark_set_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_add");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("UniqueSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut set = UniqueSet::new();
                    for index in 0..size {
                        // Every other insert is a duplicate
                        set.add(black_box(index / 2));
                    }
                    black_box(set)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Dictionary upsert and lookup
// =============================================================================

fn benchmark_dictionary_upsert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("dictionary_upsert");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("Dictionary", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut dictionary = Dictionary::new();
                    for index in 0..size {
                        dictionary.set(black_box(index), black_box(index * 2));
                    }
                    black_box(dictionary)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_dictionary_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("dictionary_get");

    for size in [100, 1000, 10000] {
        let dictionary: Dictionary<usize, usize> =
            (0..size).map(|index| (index, index * 2)).collect();

        group.bench_with_input(
            BenchmarkId::new("Dictionary", size),
            &dictionary,
            |bencher, dictionary| {
                bencher.iter(|| {
                    for index in 0..size {
                        let _ = black_box(dictionary.get(&black_box(index)));
                    }
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Shared algebra: diff and count_values
// =============================================================================

fn benchmark_algebra(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("algebra");

    for size in [100, 1000] {
        let base: OrderedList<usize> = (0..size).collect();
        let other: UniqueSet<usize> = (0..size).filter(|value| value % 3 == 0).collect();

        group.bench_with_input(
            BenchmarkId::new("diff", size),
            &(base.clone(), other),
            |bencher, (base, other)| {
                bencher.iter(|| black_box(base.diff(&[other])));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("count_values", size),
            &base,
            |bencher, base| {
                bencher.iter(|| black_box(base.count_values()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_list_push,
    benchmark_set_add,
    benchmark_dictionary_upsert,
    benchmark_dictionary_get,
    benchmark_algebra
);
criterion_main!(benches);
