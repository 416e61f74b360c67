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

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use safeint_core::checked::Checked;
use safeint_core::num::ops::guarded;
use std::hint::black_box;

/// Deterministic operand pairs spread over the whole `i64` range, including
/// values at and around the bounds.
fn operand_pairs(n: usize) -> Vec<(i64, i64)> {
    let edges = [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX];
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state as i64
    };

    let mut pairs = Vec::with_capacity(n + edges.len() * edges.len());
    for &a in &edges {
        for &b in &edges {
            pairs.push((a, b));
        }
    }
    for i in 0..n {
        // Alternate between full-range values and small ones so both the
        // accepting and the rejecting branches are exercised.
        let a = next();
        let b = if i % 2 == 0 { next() } else { next() % 1024 };
        pairs.push((a, b));
    }
    pairs
}

fn bench_guards(c: &mut Criterion) {
    let pairs = operand_pairs(4096);
    let mut group = c.benchmark_group("guard_benchmark");
    group.throughput(Throughput::Elements(pairs.len() as u64));

    let guards: [(&str, fn(i64, i64) -> bool); 5] = [
        ("add", |a, b| guarded::add(a, b).is_ok()),
        ("sub", |a, b| guarded::sub(a, b).is_ok()),
        ("mul", |a, b| guarded::mul(a, b).is_ok()),
        ("div", |a, b| guarded::div(a, b).is_ok()),
        ("rem", |a, b| guarded::rem(a, b).is_ok()),
    ];

    for (name, guard) in guards {
        group.bench_with_input(BenchmarkId::new("guarded", name), &pairs, |b, pairs| {
            b.iter(|| {
                let mut accepted = 0usize;
                for &(x, y) in pairs {
                    if guard(black_box(x), black_box(y)) {
                        accepted += 1;
                    }
                }
                accepted
            })
        });
    }

    // Baseline: the standard library's hardware-flag based checks.
    group.bench_with_input(BenchmarkId::new("std", "mul"), &pairs, |b, pairs| {
        b.iter(|| {
            let mut accepted = 0usize;
            for &(x, y) in pairs {
                if black_box(x).checked_mul(black_box(y)).is_some() {
                    accepted += 1;
                }
            }
            accepted
        })
    });

    group.finish();
}

fn bench_checked_chain(c: &mut Criterion) {
    let values: Vec<i32> = (0..1024).map(|i| (i * 7919) % 2001 - 1000).collect();
    let mut group = c.benchmark_group("checked_chain");
    group.throughput(Throughput::Elements(values.len() as u64));

    group.bench_function("polynomial", |b| {
        b.iter(|| {
            let mut failures = 0usize;
            for &v in &values {
                let x = Checked::new(black_box(v));
                let r = (x * x)
                    .and_then(|sq| sq * 3i32)
                    .and_then(|t| t - x)
                    .and_then(|t| t / 7i32);
                if r.is_err() {
                    failures += 1;
                }
            }
            failures
        })
    });

    group.finish();
}

criterion_group!(benches, bench_guards, bench_checked_chain);
criterion_main!(benches);
