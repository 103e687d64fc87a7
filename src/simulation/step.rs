//! Reaction-diffusion step function
//!
//! Each node moves by a logistic reaction term toward the carrying capacity
//! plus a diffusion term toward its neighborhood mean. Updates are
//! synchronous: every new value is computed from the previous step's state.

use serde::{Deserialize, Serialize};

use crate::core::config::check_rate;
use crate::core::constants::CARRYING_CAPACITY;
use crate::core::error::Result;
use crate::network::state::clamp_state;
use crate::network::Graph;

/// Rates of the reaction-diffusion law
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionParams {
    /// Logistic growth rate `r`
    pub reaction_rate: f64,
    /// Diffusion coefficient `D`
    pub diffusion: f64,
}

impl Default for ReactionParams {
    fn default() -> Self {
        Self {
            reaction_rate: 0.14,
            diffusion: 0.38,
        }
    }
}

impl ReactionParams {
    pub fn new(reaction_rate: f64, diffusion: f64) -> Self {
        Self {
            reaction_rate,
            diffusion,
        }
    }

    /// Both rates must be finite and non-negative
    pub fn validate(&self) -> Result<()> {
        check_rate("reaction rate", self.reaction_rate)?;
        check_rate("diffusion coefficient", self.diffusion)
    }

    /// Logistic term `r * s * (1 - s / K)`
    #[inline]
    pub fn reaction(&self, s: f64) -> f64 {
        self.reaction_rate * s * (1.0 - s / CARRYING_CAPACITY)
    }

    /// `D * mean(s[j] - s[i])` over the neighbors; zero for an isolated node
    #[inline]
    pub fn diffusion_term(&self, neighbors: &[usize], state: &[f64], s: f64) -> f64 {
        if neighbors.is_empty() {
            return 0.0;
        }
        let total: f64 = neighbors.iter().map(|&j| state[j] - s).sum();
        self.diffusion * total / neighbors.len() as f64
    }
}

/// Compute the next state of every node from `current` into `next`
///
/// `current` is never written, so no node can observe a neighbor's value from
/// the same step. Results are clamped to the state range.
pub fn step_into(graph: &Graph, params: &ReactionParams, current: &[f64], next: &mut [f64]) {
    debug_assert_eq!(current.len(), graph.node_count());
    debug_assert_eq!(current.len(), next.len());

    for (i, out) in next.iter_mut().enumerate() {
        let s = current[i];
        let reaction = params.reaction(s);
        let diffusion = params.diffusion_term(graph.neighbors(i), current, s);
        *out = clamp_state(s + reaction + diffusion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::error::DaissError;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_validate_rejects_bad_rates() {
        assert!(ReactionParams::default().validate().is_ok());
        assert!(ReactionParams::new(0.0, 0.0).validate().is_ok());

        for params in [
            ReactionParams::new(f64::NAN, 0.38),
            ReactionParams::new(0.14, f64::INFINITY),
            ReactionParams::new(-0.1, 0.38),
            ReactionParams::new(0.14, -0.38),
        ] {
            assert!(matches!(params.validate(), Err(DaissError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_reaction_vanishes_at_capacity() {
        let params = ReactionParams::default();
        assert!(params.reaction(5.0).abs() < EPS);
        assert!(params.reaction(1.0) > 0.0);
    }

    #[test]
    fn test_pure_diffusion_on_path() {
        let graph = Graph::path(3);
        let params = ReactionParams::new(0.0, 0.38);
        let current = [1.0, 2.0, 3.0];
        let mut next = [0.0; 3];

        step_into(&graph, &params, &current, &mut next);

        assert!((next[0] - 1.38).abs() < EPS);
        // Middle node sees -1 and +1: no net pull
        assert!((next[1] - 2.0).abs() < EPS);
        assert!((next[2] - 2.62).abs() < EPS);
    }

    #[test]
    fn test_isolated_node_only_reacts() {
        let graph = Graph::empty(2);
        let params = ReactionParams::new(0.14, 0.38);
        let current = [1.0, 4.0];
        let mut next = [0.0; 2];

        step_into(&graph, &params, &current, &mut next);

        assert!((next[0] - (1.0 + 0.14 * 0.8)).abs() < EPS);
        assert!((next[1] - (4.0 + 0.14 * 4.0 * 0.2)).abs() < EPS);
    }

    #[test]
    fn test_step_clamps_both_ends() {
        let graph = Graph::from_edges(2, &[(0, 1)]).unwrap();
        // Strong diffusion overshoots the midpoint in both directions
        let params = ReactionParams::new(0.0, 3.0);
        let current = [0.2, 4.9];
        let mut next = [0.0; 2];

        step_into(&graph, &params, &current, &mut next);

        assert_eq!(next, [5.0, 0.1]);
    }

    #[test]
    fn test_unclamped_input_is_clamped_after_step() {
        let graph = Graph::empty(2);
        let params = ReactionParams::new(0.0, 0.0);
        let current = [-1.0, 9.0];
        let mut next = [0.0; 2];

        step_into(&graph, &params, &current, &mut next);

        assert_eq!(next, [0.1, 5.0]);
    }
}
