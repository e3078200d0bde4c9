//! Curated re-exports for downstream callers.
//!
//! Flat list of everything a host (debug drawing, region planners) needs;
//! prefer it over reaching into submodules.

pub use crate::geom::{
    segment_intersection, sq_distance_point_segment, sq_distance_point_segment3, Aabb2, Capsule,
    Centroid, Circle, Segment, Triangle,
};
pub use crate::graph::{bfs, dfs, mst, DisjointSet, Edge, SpanningForest};
pub use crate::path::{Listen, Path, PathChange, SubscriptionId};
pub use crate::sample::{point_cloud, random_walk, ReplayToken, WalkCfg};

use nalgebra::Vector2;

/// Euclidean minimum spanning forest over points; an edge exists when two
/// points are at most `max_edge` apart (or always, for `None`).
pub fn euclidean_mst(
    points: &[Vector2<f64>],
    max_edge: Option<f64>,
) -> SpanningForest<Vector2<f64>> {
    let limit = max_edge.unwrap_or(f64::INFINITY);
    mst(
        points,
        |a, b| (b - a).norm() <= limit,
        |a, b| (b - a).norm(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn euclidean_mst_on_unit_square() {
        let pts = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        let forest = euclidean_mst(&pts, None);
        assert!(forest.is_spanning_tree());
        assert!((forest.total_cost() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn euclidean_mst_respects_max_edge() {
        let pts = [vector![0.0, 0.0], vector![1.0, 0.0], vector![10.0, 0.0]];
        let forest = euclidean_mst(&pts, Some(2.0));
        assert_eq!(forest.components, 2);
        assert_eq!(forest.len(), 1);
    }

    #[test]
    fn euclidean_mst_over_sampled_cloud_is_a_tree() {
        let area = Aabb2::from_corners(vector![0.0, 0.0], vector![10.0, 10.0]);
        let pts = point_cloud(30, area, ReplayToken::new(42, 0));
        let forest = euclidean_mst(&pts, None);
        assert_eq!(forest.len(), 29);
        // No edge can be longer than the sampling area diagonal.
        let diag = area.size().norm();
        assert!(forest.edges.iter().all(|e| e.cost <= diag));
    }
}
