//! Parallel (r, D) parameter sweep of the heartbeat

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use daiss::core::config::SimulationConfig;
use daiss::core::error::Result;
use daiss::simulation::sweep;

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Run independent heartbeat simulations over a grid of reaction and diffusion rates")]
struct Args {
    /// Reaction rates, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = vec![0.0, 0.05, 0.1, 0.14, 0.2])]
    rates: Vec<f64>,

    /// Diffusion coefficients, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = vec![0.1, 0.38, 0.7])]
    diffusions: Vec<f64>,

    /// Number of nodes
    #[arg(long, default_value_t = 100)]
    nodes: usize,

    /// Preferential attachment degree
    #[arg(long, default_value_t = 3)]
    attachment: usize,

    /// Random seed shared by every grid point
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Steps per simulation
    #[arg(long, default_value_t = 1000)]
    steps: usize,

    /// Optional JSON output file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("daiss=info")
        .init();

    let args = Args::parse();
    let base = SimulationConfig {
        nodes: args.nodes,
        attachment: args.attachment,
        seed: args.seed,
        steps: args.steps,
        ..Default::default()
    };

    let start = Instant::now();
    let outcomes = sweep(&base, &args.rates, &args.diffusions)?;

    println!("    r |     D | mean_forks |   +1  | status    | sanity");
    println!("------|-------|------------|-------|-----------|-------");
    for o in &outcomes {
        println!(
            "{:>5.3} | {:>5.3} | {:>10.4} | {:>5.3} | {:<9} | {}",
            o.reaction_rate,
            o.diffusion,
            o.result.mean_forks,
            o.result.ternary.positive,
            format!("{:?}", o.result.status),
            o.compliance.system,
        );
    }
    println!(
        "\n{} runs in {:.2}ms",
        outcomes.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    if let Some(path) = &args.output {
        std::fs::write(path, serde_json::to_string_pretty(&outcomes)?)?;
        tracing::info!("Sweep written to {}", path.display());
    }

    Ok(())
}
