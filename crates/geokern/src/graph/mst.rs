//! Kruskal-style minimum spanning tree/forest for small node sets.
//!
//! Candidate enumeration is O(n²) in predicate and cost calls, so this is meant
//! for tens of nodes (e.g. a handful of spatial regions), not large graphs.

use super::dsu::DisjointSet;

/// Accepted edge between two nodes with its evaluated cost.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<N> {
    pub a: N,
    pub b: N,
    pub cost: f64,
}

/// Minimum spanning forest: one tree per connected component.
///
/// Invariant: `edges.len() == node_count - components`.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest<N> {
    pub edges: Vec<Edge<N>>,
    pub components: usize,
    pub node_count: usize,
}

impl<N> SpanningForest<N> {
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn total_cost(&self) -> f64 {
        self.edges.iter().map(|e| e.cost).sum()
    }

    /// Single component covering every node (vacuously true for 0 or 1 node).
    #[inline]
    pub fn is_spanning_tree(&self) -> bool {
        self.components <= 1
    }
}

/// Minimum spanning forest over `nodes`.
///
/// For every ordered pair `(i, j)`, `i != j`, with `has_edge(&nodes[i], &nodes[j])`
/// the cost is evaluated once. Candidates are sorted ascending by cost with a
/// stable sort, so equal costs keep enumeration order (row-major by index).
/// An edge is accepted when its endpoints lie in different components.
///
/// `cost` must be symmetric; an asymmetric cost yields the forest for whichever
/// direction sorts first. Nodes are identified by slice position, so duplicate
/// values are distinct nodes.
pub fn mst<N, E, C>(nodes: &[N], mut has_edge: E, mut cost: C) -> SpanningForest<N>
where
    N: Clone,
    E: FnMut(&N, &N) -> bool,
    C: FnMut(&N, &N) -> f64,
{
    let n = nodes.len();
    let mut candidates: Vec<(f64, usize, usize)> = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i != j && has_edge(&nodes[i], &nodes[j]) {
                candidates.push((cost(&nodes[i], &nodes[j]), i, j));
            }
        }
    }
    candidates.sort_by(|x, y| x.0.total_cmp(&y.0));

    let mut sets = DisjointSet::new(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    for (c, i, j) in candidates.iter().copied() {
        if sets.union(i, j) {
            edges.push(Edge {
                a: nodes[i].clone(),
                b: nodes[j].clone(),
                cost: c,
            });
            if edges.len() + 1 == n {
                break;
            }
        }
    }
    let components = sets.set_count();
    debug_assert_eq!(edges.len(), n - components);
    tracing::debug!(
        nodes = n,
        candidates = candidates.len(),
        components,
        "mst done"
    );
    SpanningForest {
        edges,
        components,
        node_count: n,
    }
}
