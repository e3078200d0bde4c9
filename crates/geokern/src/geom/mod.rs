//! Value-type geometric primitives and predicates.
//!
//! Degenerate policy
//! - Segment intersection is an exact determinant test: parallel and collinear
//!   pairs (overlapping or not) never intersect.
//! - Point/segment distances clamp to the segment, never the infinite line.
//! - The triangle centroid is built from two medians; collinear vertices yield
//!   `Centroid::Degenerate` instead of a point.
//!
//! All types are `Copy` and every function is pure.

mod bounds;
mod capsule;
mod circle;
mod segment;
mod triangle;

pub use bounds::Aabb2;
pub use capsule::{sq_distance_point_segment3, Capsule};
pub use circle::Circle;
pub use segment::{segment_intersection, sq_distance_point_segment, Segment};
pub use triangle::{Centroid, Triangle};
