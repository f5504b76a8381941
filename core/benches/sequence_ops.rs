//! Benchmarks for the sequence operations against hand-written iterator chains
//!
//! Run with: `cargo bench --bench sequence_ops`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use seqops_core::{Depth, Element, filter, flat, map, reduce_with};

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");

    for size in [16, 256, 4096] {
        let input: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("seqops", size), &input, |b, input| {
            b.iter(|| black_box(map(input, |x, i, _| x * 2 + i as u64)));
        });

        group.bench_with_input(BenchmarkId::new("iter", size), &input, |b, input| {
            b.iter(|| {
                black_box(
                    input
                        .iter()
                        .enumerate()
                        .map(|(i, x)| x * 2 + i as u64)
                        .collect::<Vec<_>>(),
                )
            });
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [16, 256, 4096] {
        let input: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("seqops", size), &input, |b, input| {
            b.iter(|| black_box(filter(input, |x, _, _| x % 3 == 0)));
        });

        group.bench_with_input(BenchmarkId::new("iter", size), &input, |b, input| {
            b.iter(|| {
                black_box(
                    input
                        .iter()
                        .filter(|x| *x % 3 == 0)
                        .copied()
                        .collect::<Vec<_>>(),
                )
            });
        });
    }

    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce_with");

    for size in [16, 256, 4096] {
        let input: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("seqops", size), &input, |b, input| {
            b.iter(|| black_box(reduce_with(input, |acc: u64, x, _, _| acc + x, 0)));
        });

        group.bench_with_input(BenchmarkId::new("iter", size), &input, |b, input| {
            b.iter(|| black_box(input.iter().sum::<u64>()));
        });
    }

    group.finish();
}

/// A chain `[0, [1, [2, ...]]]` nested `levels` deep.
fn deep_chain(levels: u64) -> Vec<Element<u64>> {
    let mut tree = vec![Element::Scalar(levels)];
    for level in (0..levels).rev() {
        tree = vec![Element::Scalar(level), Element::Nested(tree)];
    }
    tree
}

/// `width` nested pairs side by side.
fn wide(width: u64) -> Vec<Element<u64>> {
    (0..width)
        .map(|i| Element::Nested(vec![Element::Scalar(i), Element::Scalar(i + 1)]))
        .collect()
}

fn bench_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat");

    for levels in [4, 32, 128] {
        let input = deep_chain(levels);
        group.bench_with_input(BenchmarkId::new("deep_infinite", levels), &input, |b, input| {
            b.iter(|| black_box(flat(input, Depth::Infinite)));
        });
    }

    for width in [16, 256, 4096] {
        let input = wide(width);
        group.bench_with_input(BenchmarkId::new("wide_one", width), &input, |b, input| {
            b.iter(|| black_box(flat(input, Depth::ONE)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_map, bench_filter, bench_reduce, bench_flat);
criterion_main!(benches);
