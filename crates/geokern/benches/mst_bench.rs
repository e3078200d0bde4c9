//! Criterion benchmarks for the small-n spanning forest and traversals.
//! Focus sizes: n in {10, 20, 50}; the O(n²) candidate scan dominates.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geokern::api::{bfs, dfs, euclidean_mst, point_cloud, Aabb2, ReplayToken};
use nalgebra::vector;

fn bench_mst(c: &mut Criterion) {
    let area = Aabb2::from_corners(vector![0.0, 0.0], vector![100.0, 100.0]);
    let mut group = c.benchmark_group("mst");
    for &n in &[10usize, 20, 50] {
        let pts = point_cloud(n, area, ReplayToken::new(43, n as u64));
        group.bench_with_input(BenchmarkId::new("euclidean_all_pairs", n), &pts, |b, pts| {
            b.iter(|| euclidean_mst(pts, None))
        });
        group.bench_with_input(BenchmarkId::new("euclidean_radius_25", n), &pts, |b, pts| {
            b.iter(|| euclidean_mst(pts, Some(25.0)))
        });
    }
    group.finish();
}

fn bench_traverse(c: &mut Criterion) {
    // Implicit k×k grid graph; nodes are (row, col).
    let mut group = c.benchmark_group("traverse");
    for &k in &[32i32, 128] {
        let grid = move |&(r, col): &(i32, i32)| {
            [(r + 1, col), (r - 1, col), (r, col + 1), (r, col - 1)]
                .into_iter()
                .filter(move |&(y, x)| (0..k).contains(&y) && (0..k).contains(&x))
        };
        group.bench_with_input(BenchmarkId::new("dfs_grid", k), &k, |b, _| {
            b.iter(|| dfs((0, 0), |_, _| {}, grid))
        });
        group.bench_with_input(BenchmarkId::new("bfs_grid", k), &k, |b, _| {
            b.iter(|| bfs((0, 0), |_, _| {}, grid))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mst, bench_traverse);
criterion_main!(benches);
