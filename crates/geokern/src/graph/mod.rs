//! Generic graph algorithms over caller-supplied node types.
//!
//! Nodes are opaque: traversal only needs `Eq + Hash + Clone` (visited set,
//! parent links), and `mst` identifies nodes by their position in the input
//! slice. Comparison is by value; callers wanting identity semantics pass an
//! id newtype (index, handle) instead of the payload.
//!
//! Neighbor and cost callbacks must not mutate the structures they read while
//! an algorithm is running over them.

mod dsu;
mod mst;
mod traverse;

pub use dsu::DisjointSet;
pub use mst::{mst, Edge, SpanningForest};
pub use traverse::{bfs, dfs};
