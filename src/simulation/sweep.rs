//! Parameter sweeps over independent simulation instances
//!
//! Uses rayon: every grid point builds its own simulation, so runs share
//! nothing and can proceed in parallel.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::simulation::engine::Simulation;
use crate::simulation::heartbeat::{Compliance, HeartbeatResult};

/// Heartbeat outcome of one `(r, D)` grid point
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepOutcome {
    pub reaction_rate: f64,
    pub diffusion: f64,
    pub result: HeartbeatResult,
    pub compliance: Compliance,
}

/// Run the heartbeat for every `(r, D)` pair
///
/// Outcomes come back in grid order (reaction rate major). Every grid point
/// is validated before any simulation runs.
pub fn sweep(
    base: &SimulationConfig,
    reaction_rates: &[f64],
    diffusions: &[f64],
) -> Result<Vec<SweepOutcome>> {
    let configs: Vec<SimulationConfig> = reaction_rates
        .iter()
        .flat_map(|&r| diffusions.iter().map(move |&d| base.with_rates(r, d)))
        .collect();

    for config in &configs {
        config.validate()?;
    }

    tracing::info!(points = configs.len(), steps = base.steps, "Starting parameter sweep");

    configs
        .par_iter()
        .map(|config| -> Result<SweepOutcome> {
            let mut sim = Simulation::new(config)?;
            let result = sim.heartbeat(config.steps);
            Ok(SweepOutcome {
                reaction_rate: config.reaction_rate,
                diffusion: config.diffusion,
                compliance: Compliance::assess(&result),
                result,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_base() -> SimulationConfig {
        SimulationConfig {
            nodes: 30,
            steps: 300,
            ..Default::default()
        }
    }

    #[test]
    fn test_sweep_grid_order() {
        let outcomes = sweep(&small_base(), &[0.0, 0.14], &[0.2, 0.38]).unwrap();
        let points: Vec<(f64, f64)> = outcomes
            .iter()
            .map(|o| (o.reaction_rate, o.diffusion))
            .collect();
        assert_eq!(points, vec![(0.0, 0.2), (0.0, 0.38), (0.14, 0.2), (0.14, 0.38)]);
    }

    #[test]
    fn test_sweep_matches_sequential_runs() {
        let base = small_base();
        let outcomes = sweep(&base, &[0.14], &[0.38]).unwrap();

        let mut sim = Simulation::new(&base).unwrap();
        assert_eq!(outcomes[0].result, sim.heartbeat(base.steps));
    }

    #[test]
    fn test_sweep_rejects_invalid_point() {
        assert!(sweep(&small_base(), &[0.14, -1.0], &[0.38]).is_err());
    }

    #[test]
    fn test_no_growth_points_fail_sanity() {
        let outcomes = sweep(&small_base(), &[0.0], &[0.38]).unwrap();
        assert!(!outcomes[0].compliance.system);
    }
}
