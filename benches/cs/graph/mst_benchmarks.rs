//! Prim against Kruskal on random connected graphs.
//!
//! Run with: cargo bench --bench mst

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mstkit::graph::{kruskal, prim, Graph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_graph(vertices: usize, edges_per_vertex: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new();
    graph.add_vertex("0");
    for i in 1..vertices {
        let parent = rng.gen_range(0..i);
        graph.add_edge(parent.to_string(), i.to_string(), rng.gen_range(1..1000));
    }
    for _ in 0..vertices * edges_per_vertex {
        let a = rng.gen_range(0..vertices);
        let b = rng.gen_range(0..vertices);
        graph.add_edge(a.to_string(), b.to_string(), rng.gen_range(1..1000));
    }
    graph
}

fn bench_mst(c: &mut Criterion) {
    let mut group = c.benchmark_group("MST");

    for &size in &[100, 1_000, 10_000] {
        let sparse = generate_graph(size, 2, 42);
        let dense = generate_graph(size, 16, 42);
        group.throughput(Throughput::Elements(sparse.edge_count() as u64));

        group.bench_with_input(BenchmarkId::new("prim_sparse", size), &sparse, |b, g| {
            b.iter(|| prim::minimum_spanning_tree(black_box(g)))
        });
        group.bench_with_input(BenchmarkId::new("kruskal_sparse", size), &sparse, |b, g| {
            b.iter(|| kruskal::minimum_spanning_tree(black_box(g)))
        });
        group.throughput(Throughput::Elements(dense.edge_count() as u64));
        group.bench_with_input(BenchmarkId::new("prim_dense", size), &dense, |b, g| {
            b.iter(|| prim::minimum_spanning_tree(black_box(g)))
        });
        group.bench_with_input(BenchmarkId::new("kruskal_dense", size), &dense, |b, g| {
            b.iter(|| kruskal::minimum_spanning_tree(black_box(g)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mst);
criterion_main!(benches);
