//! Creative leap vs logical robustness
//!
//! Generates human-like, AI-like and random idea trajectories and places each
//! in (semantic radius, robustness) space. Emits the scatter data as JSON.

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use daiss::core::error::Result;
use daiss::metrics::{simulate_point, TrajectoryKind, TrajectoryPoint};

#[derive(Parser, Debug)]
#[command(name = "trajectory_sim")]
#[command(about = "Scatter synthetic idea trajectories by semantic radius and robustness")]
struct Args {
    /// Trajectories generated per kind
    #[arg(long, default_value_t = 20)]
    points_per_kind: usize,

    /// Points per trajectory
    #[arg(long, default_value_t = 20)]
    steps: usize,

    /// Embedding dimension
    #[arg(long, default_value_t = 16)]
    dim: usize,

    /// Random seed for deterministic runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Optional JSON output file for the scatter points
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("daiss=info")
        .init();

    let args = Args::parse();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut points: Vec<TrajectoryPoint> = Vec::new();
    for kind in TrajectoryKind::ALL {
        for _ in 0..args.points_per_kind {
            points.push(simulate_point(kind, args.steps, args.dim, &mut rng)?);
        }
    }

    println!("{:<12} | {:>10} | {:>14}", "Kind", "Mean E_t", "Median R_t");
    println!("-------------|------------|---------------");
    for kind in TrajectoryKind::ALL {
        let of_kind: Vec<&TrajectoryPoint> = points.iter().filter(|p| p.kind == kind).collect();
        if of_kind.is_empty() {
            continue;
        }
        let mean_radius =
            of_kind.iter().map(|p| p.semantic_radius).sum::<f64>() / of_kind.len() as f64;
        let mut robustness: Vec<f64> = of_kind.iter().map(|p| p.robustness).collect();
        robustness.sort_by(f64::total_cmp);
        let median = robustness[robustness.len() / 2];

        println!("{:<12} | {:>10.4} | {:>14.4}", kind.label(), mean_radius, median);
    }

    if let Some(path) = &args.output {
        std::fs::write(path, serde_json::to_string_pretty(&points)?)?;
        tracing::info!(points = points.len(), "Scatter data written to {}", path.display());
    }

    Ok(())
}
