use aabbkit::{Box3d, DispatchConfig, Dispatcher, PointArray};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand::rngs::StdRng;

const N_POINTS: usize = 1_000_000;

fn random_points(count: usize) -> PointArray<f64, 3> {
    let mut rng = StdRng::seed_from_u64(123456789);
    let points = (0..count)
        .map(|_| [rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)])
        .collect();
    PointArray::new(points)
}

fn worker_counts() -> Vec<usize> {
    let max_cores = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(8);
    let mut counts = Vec::new();
    let mut cores = 1;
    while cores <= max_cores {
        counts.push(cores);
        cores *= 2;
    }
    if counts.last().map_or(false, |&last| last < max_cores) {
        counts.push(max_cores);
    }
    counts
}

fn benchmark_batch(c: &mut Criterion) {
    let points = random_points(N_POINTS);
    let query = Box3d::new([25.0, 25.0, 25.0], [75.0, 75.0, 75.0]);

    let mut group = c.benchmark_group(format!("batch_{}k", N_POINTS / 1000));
    group.sample_size(10);

    for workers in worker_counts() {
        let dispatcher = Dispatcher::with_pool(DispatchConfig::new(workers).with_min_parallel_len(0))
            .expect("failed to build worker pool");

        group.bench_with_input(BenchmarkId::new("extend_by_points", workers), &workers, |b, &_w| {
            b.iter(|| {
                let mut bounds = Box3d::default();
                bounds.extend_by_points(black_box(&points), &dispatcher);
                bounds
            })
        });

        group.bench_with_input(BenchmarkId::new("intersects_points", workers), &workers, |b, &_w| {
            b.iter(|| query.intersects_points(black_box(&points), &dispatcher))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_batch);
criterion_main!(benches);
