use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use geokern::api::{euclidean_mst, point_cloud, Aabb2, Path, ReplayToken};
use nalgebra::Vector2;
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Run geokern algorithms over JSON point files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Euclidean minimum spanning forest over a point file
    Mst {
        #[arg(long)]
        input: String,
        /// Only points at most this far apart are connected
        #[arg(long)]
        max_edge: Option<f64>,
        /// Write the JSON result here instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Build a path from a point file and report its derived values
    Path {
        #[arg(long)]
        input: String,
    },
    /// Write a reproducible random point cloud
    Sample {
        #[arg(long, default_value_t = 20)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Side length of the square sampling area anchored at the origin
        #[arg(long, default_value_t = 100.0)]
        extent: f64,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct MstEdgeOut {
    a: [f64; 2],
    b: [f64; 2],
    cost: f64,
}

#[derive(Serialize)]
struct MstOut {
    nodes: usize,
    components: usize,
    total_cost: f64,
    edges: Vec<MstEdgeOut>,
}

#[derive(Serialize)]
struct PathOut {
    count: usize,
    length: f64,
    bounds: Option<[[f64; 2]; 2]>,
    cw: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Mst {
            input,
            max_edge,
            out,
        } => run_mst(input, max_edge, out),
        Action::Path { input } => run_path(input),
        Action::Sample {
            n,
            seed,
            index,
            extent,
            out,
        } => sample(n, seed, index, extent, out),
        Action::Report => report(),
    }
}

#[inline]
fn pair(p: Vector2<f64>) -> [f64; 2] {
    [p.x, p.y]
}

fn run_mst(input: String, max_edge: Option<f64>, out: Option<String>) -> Result<()> {
    tracing::info!(input, max_edge = ?max_edge, "mst");
    let points = io::read_points(&input)?;
    let forest = euclidean_mst(&points, max_edge);
    if !forest.is_spanning_tree() {
        tracing::warn!(
            components = forest.components,
            edges = forest.len(),
            "points are not connected; result is a forest"
        );
    }
    let result = MstOut {
        nodes: forest.node_count,
        components: forest.components,
        total_cost: forest.total_cost(),
        edges: forest
            .edges
            .iter()
            .map(|e| MstEdgeOut {
                a: pair(e.a),
                b: pair(e.b),
                cost: e.cost,
            })
            .collect(),
    };
    match out {
        Some(path) => io::write_json(path, &result),
        None => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
    }
}

fn run_path(input: String) -> Result<()> {
    tracing::info!(input, "path");
    let path = Path::from_points(&io::read_points(&input)?);
    let result = PathOut {
        count: path.len(),
        length: path.length(),
        bounds: path.bounds().map(|b| [pair(b.min), pair(b.max)]),
        cw: path.is_cw(),
    };
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn sample(n: usize, seed: u64, index: u64, extent: f64, out: String) -> Result<()> {
    tracing::info!(n, seed, index, extent, out, "sample");
    if !(extent.is_finite() && extent > 0.0) {
        bail!("extent must be a positive finite number, got {extent}");
    }
    let area = Aabb2::from_corners(Vector2::zeros(), Vector2::new(extent, extent));
    let points = point_cloud(n, area, ReplayToken::new(seed, index));
    io::write_points(&out, &points)
}

fn report() -> Result<()> {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let obj = serde_json::json!({
        "code_rev": rev,
        "geokern_version": geokern::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
