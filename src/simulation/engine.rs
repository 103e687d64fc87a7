//! Sovereignty simulation: owns one graph and one state vector

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::SimulationConfig;
use crate::core::error::{DaissError, Result};
use crate::core::types::Step;
use crate::network::{barabasi_albert, initial_state, Graph, StateBuffers};
use crate::simulation::heartbeat::{evaluate_heartbeat, HeartbeatResult};
use crate::simulation::history::{History, StepRecord};
use crate::simulation::step::{step_into, ReactionParams};

/// One simulation instance
///
/// Each instance owns its graph, buffers and parameters; nothing is shared
/// between instances.
#[derive(Clone, Debug)]
pub struct Simulation {
    graph: Graph,
    buffers: StateBuffers,
    params: ReactionParams,
    steps_taken: Step,
}

impl Simulation {
    /// Build the graph and initial state from a validated config
    ///
    /// A single ChaCha8 stream seeded with `config.seed` draws the topology
    /// first and the initial state second.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let graph = barabasi_albert(config.nodes, config.attachment, &mut rng)?;
        let state = initial_state(config.nodes, &mut rng)?;

        Ok(Self {
            graph,
            buffers: StateBuffers::new(state),
            params: ReactionParams::new(config.reaction_rate, config.diffusion),
            steps_taken: 0,
        })
    }

    /// Build from an explicit graph and initial state
    ///
    /// The state may lie outside the clamp range but every entry must be finite.
    pub fn from_parts(graph: Graph, state: Vec<f64>, params: ReactionParams) -> Result<Self> {
        params.validate()?;

        if state.is_empty() {
            return Err(DaissError::InvalidConfig(
                "state vector must not be empty".into(),
            ));
        }
        if state.len() != graph.node_count() {
            return Err(DaissError::DimensionMismatch {
                expected: graph.node_count(),
                found: state.len(),
            });
        }
        if let Some(i) = state.iter().position(|s| !s.is_finite()) {
            return Err(DaissError::InvalidConfig(format!(
                "initial state of node {} is not finite: {}",
                i, state[i]
            )));
        }

        Ok(Self {
            graph,
            buffers: StateBuffers::new(state),
            params,
            steps_taken: 0,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn params(&self) -> &ReactionParams {
        &self.params
    }

    /// Committed state vector
    pub fn state(&self) -> &[f64] {
        self.buffers.current()
    }

    pub fn node_count(&self) -> usize {
        self.buffers.len()
    }

    pub fn steps_taken(&self) -> Step {
        self.steps_taken
    }

    /// Advance every node by one synchronous step
    pub fn step(&mut self) {
        let (current, next) = self.buffers.split();
        step_into(&self.graph, &self.params, current, next);
        self.buffers.swap();
        self.steps_taken += 1;
    }

    /// Run `steps` steps and record statistics after each one
    ///
    /// Continues from the current state; a fresh history is returned per call.
    pub fn run(&mut self, steps: usize) -> History {
        let mut history = History::with_capacity(steps);
        for _ in 0..steps {
            self.step();
            history.push(StepRecord::from_state(self.state()));
        }

        if let Some(last) = history.last() {
            tracing::debug!(
                steps,
                total_steps = self.steps_taken,
                forks = last.forks,
                positive = last.ternary.positive,
                "Simulation run complete"
            );
        }

        history
    }

    /// Run `steps` steps and evaluate the heartbeat of that run
    pub fn heartbeat(&mut self, steps: usize) -> HeartbeatResult {
        evaluate_heartbeat(&self.run(steps))
    }
}
