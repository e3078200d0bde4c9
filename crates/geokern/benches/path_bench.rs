//! Criterion benchmarks for `Path`: incremental `add` vs one `set_vertices`,
//! plus the distance and intersection queries on long walks.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use geokern::api::{random_walk, Path, ReplayToken, Segment, WalkCfg};
use nalgebra::vector;

fn bench_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("path");
    for &n in &[100usize, 1_000, 10_000] {
        let pts = random_walk(n, WalkCfg::default(), ReplayToken::new(44, n as u64));

        group.bench_with_input(BenchmarkId::new("add_each", n), &pts, |b, pts| {
            b.iter(|| {
                let mut path = Path::new();
                for &p in pts {
                    path.add(p);
                }
                path
            })
        });

        group.bench_with_input(BenchmarkId::new("set_vertices", n), &pts, |b, pts| {
            b.iter_batched(
                Path::new,
                |mut path| {
                    path.set_vertices(pts.iter().copied());
                    path
                },
                BatchSize::SmallInput,
            )
        });

        let path = Path::from_points(&pts);
        group.bench_with_input(BenchmarkId::new("distance_to_point", n), &path, |b, path| {
            b.iter(|| path.distance_to_point(vector![0.5, 0.5], 1))
        });
        let probe = Segment::new(vector![0.0, 0.0], vector![3.0, 3.0]);
        group.bench_with_input(BenchmarkId::new("intersection", n), &path, |b, path| {
            b.iter(|| path.intersection(&probe))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_path);
criterion_main!(benches);
