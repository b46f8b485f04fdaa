use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_efficiency::efficiency;
use graph_efficiency::graph::generators::random_graph;
use rand::prelude::*;

fn bench_strategies(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(97);
    let graph = random_graph(&mut rng, 200, 1600).unwrap();

    let mut group = c.benchmark_group("efficiency");
    group.bench_function("dense", |b| {
        b.iter(|| efficiency::dense(&graph).unwrap());
    });
    group.bench_function("sequential", |b| {
        b.iter(|| efficiency::sequential(&graph).unwrap());
    });
    for workers in [2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("parallel", workers),
            &workers,
            |b, &workers| {
                b.iter(|| efficiency::parallel(&graph, workers).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
