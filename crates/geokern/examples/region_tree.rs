//! Connect overlapping circular regions with a minimum spanning forest, then
//! walk each tree breadth-first and print hop depths.
//!
//! Usage:
//!   cargo run -p geokern --example region_tree -- [count] [seed]

use std::collections::HashMap;

use geokern::api::{bfs, mst, point_cloud, Aabb2, Circle, ReplayToken};
use nalgebra::vector;

fn main() {
    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(12);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);

    let area = Aabb2::from_corners(vector![0.0, 0.0], vector![20.0, 20.0]);
    let regions: Vec<Circle> = point_cloud(count, area, ReplayToken::new(seed, 0))
        .into_iter()
        .map(|c| Circle::new(c, 3.0))
        .collect();

    // Nodes are region indices so equality is by identity, not by geometry.
    let ids: Vec<usize> = (0..regions.len()).collect();
    let forest = mst(
        &ids,
        |&a, &b| regions[a].intersects_circle(&regions[b]),
        |&a, &b| (regions[a].center - regions[b].center).norm(),
    );
    println!(
        "{} regions, {} edges, {} components, total cost {:.3}",
        forest.node_count,
        forest.len(),
        forest.components,
        forest.total_cost()
    );

    let mut adj: HashMap<usize, Vec<usize>> = HashMap::new();
    for e in &forest.edges {
        adj.entry(e.a).or_default().push(e.b);
        adj.entry(e.b).or_default().push(e.a);
    }
    let mut depth: HashMap<usize, usize> = HashMap::new();
    for &root in &ids {
        if depth.contains_key(&root) {
            continue;
        }
        bfs(
            root,
            |&n, parent| {
                let d = parent.map_or(0, |p| depth[p] + 1);
                depth.insert(n, d);
                println!("region {n:>3} depth {d} (tree rooted at {root})");
            },
            |n| adj.get(n).cloned().unwrap_or_default(),
        );
    }
}
