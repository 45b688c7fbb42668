#![allow(clippy::all)]
//! Criterion benchmarks for the list scenarios.
//!
//! Tests: bulk append, single appends, appends after growth, search and
//! remove, search; on `Vec` and `LinkedList` across fixture sizes. Also
//! measures the overhead of the in-crate runner.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use list_bench::fixture::{Fixture, APPEND_PROBE_OFFSETS, SEARCH_PROBE_OFFSETS};
use list_bench::list::SequentialList;
use list_bench::perf::{BenchmarkCase, BenchmarkRunner};
use std::collections::LinkedList;
use std::hint::black_box;

const SIZES: [usize; 3] = [5, 100, 1_000];

fn refs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

fn filled<'a, L: SequentialList<&'a str>>(elements: &[&'a str]) -> L {
    let mut list = L::with_capacity(elements.len());
    list.append_all(elements);
    list
}

// ---------------------------------------------------------------------------
// Appends
// ---------------------------------------------------------------------------

fn bench_append_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("lists/append_all");

    for size in SIZES {
        let fixture = Fixture::new(size);
        let elements = refs(fixture.elements());

        group.bench_with_input(BenchmarkId::new("vec", size), &elements, |b, elements| {
            b.iter_batched(
                Vec::new,
                |mut list: Vec<&str>| {
                    list.append_all(elements);
                    list
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("linked", size), &elements, |b, elements| {
            b.iter_batched(
                LinkedList::new,
                |mut list: LinkedList<&str>| {
                    list.append_all(elements);
                    list
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_append_from_scratch(c: &mut Criterion) {
    let mut group = c.benchmark_group("lists/append_from_scratch");

    for size in SIZES {
        let fixture = Fixture::new(size);
        let elements = refs(fixture.elements());

        group.bench_with_input(BenchmarkId::new("vec", size), &elements, |b, elements| {
            b.iter_batched(
                Vec::new,
                |mut list: Vec<&str>| {
                    for &element in elements {
                        list.push(element);
                    }
                    list
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("linked", size), &elements, |b, elements| {
            b.iter_batched(
                LinkedList::new,
                |mut list: LinkedList<&str>| {
                    for &element in elements {
                        list.push_back(element);
                    }
                    list
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_append_on_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("lists/append_on_end");

    for size in SIZES {
        let fixture = Fixture::new(size);
        let elements = refs(fixture.elements());
        let probes = fixture.probes(&APPEND_PROBE_OFFSETS);
        let probes = refs(&probes);

        group.bench_function(BenchmarkId::new("vec", size), |b| {
            b.iter_batched(
                || elements.iter().copied().collect::<Vec<_>>(),
                |mut list| {
                    for &probe in &probes {
                        list.push(probe);
                    }
                    list
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("linked", size), |b| {
            b.iter_batched(
                || elements.iter().copied().collect::<LinkedList<_>>(),
                |mut list| {
                    for &probe in &probes {
                        list.push_back(probe);
                    }
                    list
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

fn bench_search_and_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("lists/search_and_remove");

    for size in SIZES {
        let fixture = Fixture::new(size);
        let elements = refs(fixture.elements());
        let probes = fixture.probes(&SEARCH_PROBE_OFFSETS);
        let probes = refs(&probes);

        group.bench_function(BenchmarkId::new("vec", size), |b| {
            b.iter_batched(
                || filled::<Vec<&str>>(&elements),
                |mut list| {
                    for probe in &probes {
                        black_box(list.remove_first(probe));
                    }
                    list
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("linked", size), |b| {
            b.iter_batched(
                || filled::<LinkedList<&str>>(&elements),
                |mut list| {
                    for probe in &probes {
                        black_box(list.remove_first(probe));
                    }
                    list
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("lists/search");

    for size in SIZES {
        let fixture = Fixture::new(size);
        let elements = refs(fixture.elements());
        let probes = fixture.probes(&SEARCH_PROBE_OFFSETS);
        let probes = refs(&probes);

        let array = filled::<Vec<&str>>(&elements);
        group.bench_function(BenchmarkId::new("vec", size), |b| {
            b.iter(|| {
                for probe in &probes {
                    black_box(SequentialList::contains(&array, probe));
                }
            });
        });

        let linked = filled::<LinkedList<&str>>(&elements);
        group.bench_function(BenchmarkId::new("linked", size), |b| {
            b.iter(|| {
                for probe in &probes {
                    black_box(SequentialList::contains(&linked, probe));
                }
            });
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Runner overhead
// ---------------------------------------------------------------------------

fn bench_runner_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("harness/runner");

    for measured in [100u64, 1_000] {
        group.bench_with_input(
            BenchmarkId::new("noop_case", measured),
            &measured,
            |b, &measured| {
                let runner = BenchmarkRunner::new(0, measured);
                let mut case = BenchmarkCase::new("noop", || (), |_: &mut ()| {});
                b.iter(|| {
                    black_box(runner.run(&mut case).unwrap());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_append_all,
    bench_append_from_scratch,
    bench_append_on_end,
    bench_search_and_remove,
    bench_search,
    bench_runner_overhead,
);
criterion_main!(benches);
