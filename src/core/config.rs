//! Simulation configuration with documented defaults
//!
//! A configuration fully determines a run: the same config always builds the
//! same graph, the same initial state and therefore the same history.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{DaissError, Result};

/// Configuration for one sovereignty simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === TOPOLOGY ===
    /// Number of nodes in the interaction graph
    ///
    /// Note that the fork index is an absolute count divided by 10, so the
    /// node count directly bounds the maximum reachable `mean_forks`
    /// (N / 10). With the default heartbeat band of [2.0, 5.0] only
    /// saturated populations of 20..=50 nodes land inside it.
    pub nodes: usize,

    /// Edges each new node attaches with during preferential attachment
    ///
    /// Must be at least 1 and strictly less than `nodes`.
    pub attachment: usize,

    // === DYNAMICS ===
    /// Logistic reaction rate `r`
    ///
    /// At 0.14 a node starting near 1.0 crosses the fork threshold (3.0)
    /// in roughly 15 steps and then settles at the carrying capacity.
    /// A rate of 0.0 leaves only diffusion, which conserves the mean.
    pub reaction_rate: f64,

    /// Diffusion coefficient `D` applied to the neighbor mean difference
    ///
    /// Values in (0, 1] pull a node toward its neighborhood average without
    /// overshoot.
    pub diffusion: f64,

    // === REPRODUCIBILITY ===
    /// Seed for the run's random source (topology and initial state)
    pub seed: u64,

    /// Steps executed by the heartbeat path
    pub steps: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            nodes: 100,
            attachment: 3,
            reaction_rate: 0.14,
            diffusion: 0.38,
            seed: 42,
            steps: 1000,
        }
    }
}

impl SimulationConfig {
    /// Same config with a different reaction rate and diffusion coefficient
    pub fn with_rates(&self, reaction_rate: f64, diffusion: f64) -> Self {
        Self {
            reaction_rate,
            diffusion,
            ..self.clone()
        }
    }

    /// Validate configuration before any simulation state is built
    pub fn validate(&self) -> Result<()> {
        if self.nodes == 0 {
            return Err(DaissError::InvalidConfig(
                "node count must be positive".into(),
            ));
        }

        if self.attachment == 0 {
            return Err(DaissError::InvalidConfig(
                "attachment degree must be positive".into(),
            ));
        }

        if self.attachment >= self.nodes {
            return Err(DaissError::InvalidConfig(format!(
                "attachment degree ({}) must be < node count ({})",
                self.attachment, self.nodes
            )));
        }

        check_rate("reaction rate", self.reaction_rate)?;
        check_rate("diffusion coefficient", self.diffusion)
    }
}

/// Rates must be finite and non-negative
pub(crate) fn check_rate(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DaissError::InvalidConfig(format!(
            "{} must be finite and non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Load and validate a config from a TOML file
///
/// Missing keys fall back to the defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<SimulationConfig> {
    let contents = fs::read_to_string(path.as_ref())?;
    parse_config(&contents)
}

/// Parse and validate a config from TOML text
pub fn parse_config(contents: &str) -> Result<SimulationConfig> {
    let config: SimulationConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}
