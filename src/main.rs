//! DAISS - Heartbeat verification entry point
//!
//! Runs the canonical sovereignty simulation, evaluates its heartbeat and
//! writes the verification snapshot. Exits non-zero only when the system
//! sanity check fails; theoretical non-compliance is reported but tolerated.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use daiss::core::config::{load_config, SimulationConfig};
use daiss::core::error::Result;
use daiss::simulation::{Simulation, VerificationReport};

/// Heartbeat verification for the sovereignty simulation
#[derive(Parser, Debug)]
#[command(name = "daiss")]
#[command(about = "Run the sovereignty simulation and verify its heartbeat")]
struct Args {
    /// TOML config file; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Logistic reaction rate r
    #[arg(long)]
    reaction_rate: Option<f64>,

    /// Diffusion coefficient D
    #[arg(long)]
    diffusion: Option<f64>,

    /// Random seed for topology and initial state
    #[arg(long)]
    seed: Option<u64>,

    /// Number of nodes
    #[arg(long)]
    nodes: Option<usize>,

    /// Preferential attachment degree
    #[arg(long)]
    attachment: Option<usize>,

    /// Steps to simulate before the heartbeat
    #[arg(long)]
    steps: Option<usize>,

    /// Where to write the verification snapshot
    #[arg(long, default_value = "output/verified_snapshot.json")]
    output: PathBuf,
}

impl Args {
    fn resolve_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(r) = self.reaction_rate {
            config.reaction_rate = r;
        }
        if let Some(d) = self.diffusion {
            config.diffusion = d;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(nodes) = self.nodes {
            config.nodes = nodes;
        }
        if let Some(attachment) = self.attachment {
            config.attachment = attachment;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter("daiss=info")
        .init();

    let args = Args::parse();

    match verify(&args) {
        Ok(true) => {
            println!("\nSUCCESS: System sanity confirmed. Fragment preserved.");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("\nCRITICAL: System collapse detected.");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("Verification aborted: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Run the heartbeat and write the snapshot; returns system sanity
fn verify(args: &Args) -> Result<bool> {
    let config = args.resolve_config()?;

    tracing::info!(
        nodes = config.nodes,
        reaction_rate = config.reaction_rate,
        diffusion = config.diffusion,
        seed = config.seed,
        "Initiating DAISS heartbeat verification"
    );

    let mut sim = Simulation::new(&config)?;
    let report = VerificationReport::new(sim.heartbeat(config.steps));

    println!("--- Statistics ---");
    println!("{}", report.summary());

    if !report.compliance.theoretical {
        tracing::warn!(
            mean_forks = report.metrics.mean_forks,
            positive = report.metrics.ternary.positive,
            "Heartbeat outside the theoretical health band"
        );
    }

    report.write_to(&args.output)?;
    tracing::info!("Snapshot written to {}", args.output.display());

    Ok(report.compliance.system)
}
