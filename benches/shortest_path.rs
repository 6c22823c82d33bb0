use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use digraph::{Graph, PathFinder, ShortestPathStrategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

/// 随机稀疏图，平均出度为 4
fn random_graph(n: i64) -> Graph {
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = Graph::new();
    for v in 0..n {
        graph.add_node(v).unwrap();
    }
    for _ in 0..n * 4 {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        let weight = rng.gen_range(0.0..100.0);
        graph.add_edge(from, to, Some(weight)).unwrap();
    }
    graph
}

/// 线性扫描与优先队列两种选取策略的对比
fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    for n in [100i64, 1_000, 5_000] {
        let graph = random_graph(n);

        for strategy in [
            ShortestPathStrategy::LinearScan,
            ShortestPathStrategy::PriorityQueue,
        ] {
            let finder = PathFinder::new(&graph).with_strategy(strategy);
            group.bench_with_input(BenchmarkId::new(strategy.to_string(), n), &n, |b, &n| {
                b.iter(|| black_box(finder.distances(black_box(0)).unwrap().len() as i64 <= n));
            });
        }
    }

    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let graph = random_graph(10_000);

    c.bench_function("depth_first_search", |b| {
        b.iter(|| black_box(graph.depth_first_search(black_box(0)).unwrap()));
    });
    c.bench_function("breadth_first_search", |b| {
        b.iter(|| black_box(graph.breadth_first_search(black_box(0)).unwrap()));
    });
    c.bench_function("is_cyclic", |b| {
        b.iter(|| black_box(graph.is_cyclic()));
    });
}

criterion_group!(benches, bench_shortest_path, bench_traversal);
criterion_main!(benches);
