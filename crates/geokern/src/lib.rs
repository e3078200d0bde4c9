//! Graph algorithms and 2D/3D geometry primitives.
//!
//! The crate is a small kernel with three parts:
//! - `geom`: value-type primitives (`Segment`, `Circle`, `Triangle`, `Capsule`)
//!   plus `Aabb2` bounds and pure predicates.
//! - `graph`: generic `dfs`/`bfs` traversal and a small-n spanning forest (`mst`).
//! - `path`: `Path`, a mutable polyline caching its length and bounds.
//!
//! Everything runs synchronously on the calling thread. Shared state (a `Path`,
//! or caller data read by neighbor functions) needs external synchronization.
//!
//! Conventions
//! - Points and vectors are `nalgebra` types (`Vec2`/`Vec3` below).
//! - Degenerate geometry returns `Option`/sentinel-carrying enums; only violated
//!   preconditions panic or return `GeomError`.

pub mod api;
pub mod cfg;
pub mod error;
pub mod geom;
pub mod graph;
pub mod path;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::GeomCfg;
pub use error::{GeomError, GeomResult};
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{Aabb2, Capsule, Centroid, Circle, Segment, Triangle};
    pub use crate::graph::{bfs, dfs, mst, Edge, SpanningForest};
    pub use crate::path::{Listen, Path, PathChange, SubscriptionId};
    pub use crate::{GeomCfg, GeomError, GeomResult};
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn cross2(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
