// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seq_interval::DirectedInterval;
use std::hint::black_box;

fn bench_combinators(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_ops");

    let pairs = [
        (
            "forward",
            DirectedInterval::new(1_i64, 10_000),
            DirectedInterval::new(5_000, 15_000),
        ),
        (
            "backward",
            DirectedInterval::new(10_000_i64, 1),
            DirectedInterval::new(15_000, 5_000),
        ),
    ];

    for (label, a, b) in pairs {
        group.bench_with_input(BenchmarkId::new("union", label), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a).union(black_box(b)))
        });
        group.bench_with_input(BenchmarkId::new("subtract", label), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a).subtract(black_box(b)))
        });
        group.bench_with_input(BenchmarkId::new("intersect", label), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a).intersect(black_box(b)))
        });
    }
    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let iv = DirectedInterval::new(1_000_000_i64, 1);
    c.bench_function("iterate_backward_1m", |bench| {
        bench.iter(|| black_box(iv).iter().fold(0_i64, |acc, p| acc.wrapping_add(p)))
    });
}

criterion_group!(benches, bench_combinators, bench_iteration);
criterion_main!(benches);
