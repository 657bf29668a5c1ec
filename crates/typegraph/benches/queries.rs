//! Benchmarks for typegraph query operations.
//!
//! These benchmarks measure the performance of:
//! - `forward_closure` on long chains and wide fan-outs
//! - `find_cycles` on a single long cycle
//! - `dependents` on a registry where every type shares one dependency

// Benchmark code - performance of the benchmark setup is not critical
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use typegraph::{Config, DeclarationRecord, TypeGraph};

/// Build `T0 -> T1 -> ... -> T(n-1)`, closing back to `T0` when `cyclic`.
///
/// ```text
/// T0 -> T1 -> ... -> T(n-1) (-> T0)
/// ```
fn chain(n: usize, cyclic: bool) -> TypeGraph {
    let mut graph = TypeGraph::new(&Config::default()).expect("default config");
    let registry = graph.registry_mut();
    for i in 0..n {
        let next = if i + 1 < n {
            Some(i + 1)
        } else if cyclic {
            Some(0)
        } else {
            None
        };
        registry.register(DeclarationRecord::new(
            format!("T{i}"),
            "Chain.kt",
            next.map(|j| vec![format!("T{j}")]).unwrap_or_default(),
        ));
    }
    graph
}

/// Build `Hub` plus `n` leaves, each leaf depending on `Shared`.
fn fan_out(n: usize) -> TypeGraph {
    let mut graph = TypeGraph::new(&Config::default()).expect("default config");
    let registry = graph.registry_mut();
    registry.register(DeclarationRecord::new(
        "Hub",
        "Hub.kt",
        (0..n).map(|i| format!("Leaf{i}")).collect(),
    ));
    for i in 0..n {
        registry.register(DeclarationRecord::new(
            format!("Leaf{i}"),
            "Leaf.kt",
            vec!["Shared".to_string()],
        ));
    }
    registry.register(DeclarationRecord::new("Shared", "Shared.kt", Vec::new()));
    graph
}

fn bench_forward_closure(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward_closure");

    for size in [100, 1_000, 10_000] {
        let deep = chain(size, false);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("chain", size), &deep, |b, graph| {
            b.iter(|| graph.forward_closure(black_box("T0")));
        });

        let wide = fan_out(size);
        group.bench_with_input(BenchmarkId::new("fan_out", size), &wide, |b, graph| {
            b.iter(|| graph.forward_closure(black_box("Hub")));
        });
    }

    group.finish();
}

fn bench_find_cycles(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_cycles");

    for size in [100, 1_000, 10_000] {
        let cyclic = chain(size, true);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("ring", size), &cyclic, |b, graph| {
            b.iter(|| graph.find_cycles(black_box("T0")));
        });
    }

    group.finish();
}

fn bench_dependents(c: &mut Criterion) {
    let mut group = c.benchmark_group("dependents");

    for size in [100, 1_000, 10_000] {
        let wide = fan_out(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("shared", size), &wide, |b, graph| {
            b.iter(|| graph.dependents(black_box("Shared")));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_forward_closure,
    bench_find_cycles,
    bench_dependents
);
criterion_main!(benches);
