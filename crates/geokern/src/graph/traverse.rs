//! Iterative depth-first and breadth-first traversal over caller-defined nodes.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// Depth-first traversal from `start` with an explicit stack.
///
/// `process(node, parent)` runs once per reachable node, with the node whose
/// expansion pushed it (`None` for `start`). Entries are pushed without a
/// visitation check and filtered when popped, so cycles and repeated
/// neighbors are harmless. Returns the number of processed nodes.
pub fn dfs<N, P, F, I>(start: N, mut process: P, mut neighbors: F) -> usize
where
    N: Eq + Hash + Clone,
    P: FnMut(&N, Option<&N>),
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut visited: HashSet<N> = HashSet::new();
    let mut stack: Vec<(N, Option<N>)> = vec![(start, None)];
    while let Some((node, parent)) = stack.pop() {
        if visited.contains(&node) {
            continue;
        }
        visited.insert(node.clone());
        process(&node, parent.as_ref());
        for next in neighbors(&node) {
            stack.push((next, Some(node.clone())));
        }
    }
    tracing::trace!(visited = visited.len(), "dfs done");
    visited.len()
}

/// Breadth-first traversal from `start` with a FIFO queue.
///
/// Nodes are marked visited when enqueued, so each parent is the first node
/// that discovered it and the parent links form a minimum-hop tree rooted at
/// `start`. Returns the number of processed nodes.
pub fn bfs<N, P, F, I>(start: N, mut process: P, mut neighbors: F) -> usize
where
    N: Eq + Hash + Clone,
    P: FnMut(&N, Option<&N>),
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut visited: HashSet<N> = HashSet::new();
    let mut queue: VecDeque<(N, Option<N>)> = VecDeque::new();
    visited.insert(start.clone());
    queue.push_back((start, None));
    while let Some((node, parent)) = queue.pop_front() {
        process(&node, parent.as_ref());
        for next in neighbors(&node) {
            if visited.insert(next.clone()) {
                queue.push_back((next, Some(node.clone())));
            }
        }
    }
    tracing::trace!(visited = visited.len(), "bfs done");
    visited.len()
}
