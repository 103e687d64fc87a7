//! Sovereignty state vector with double buffering

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::core::constants::{INITIAL_MEAN, INITIAL_STD_DEV, STATE_MAX, STATE_MIN};
use crate::core::error::Result;

/// Draw the initial state of `nodes` nodes from Normal(1.0, 0.2)
///
/// Not clamped: the clamp only applies to committed steps.
pub fn initial_state<R: Rng + ?Sized>(nodes: usize, rng: &mut R) -> Result<Vec<f64>> {
    let normal = Normal::new(INITIAL_MEAN, INITIAL_STD_DEV)?;
    Ok((0..nodes).map(|_| normal.sample(rng)).collect())
}

/// Clamp a value into the committed state range
#[inline]
pub fn clamp_state(value: f64) -> f64 {
    value.clamp(STATE_MIN, STATE_MAX)
}

/// Front/back pair of state buffers
///
/// Steps read the front buffer and write the back buffer, then `swap`
/// commits. The front buffer is the only one ever exposed.
#[derive(Clone, Debug)]
pub struct StateBuffers {
    front: Vec<f64>,
    back: Vec<f64>,
}

impl StateBuffers {
    pub fn new(initial: Vec<f64>) -> Self {
        let back = vec![0.0; initial.len()];
        Self { front: initial, back }
    }

    pub fn len(&self) -> usize {
        self.front.len()
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_empty()
    }

    /// Committed state
    pub fn current(&self) -> &[f64] {
        &self.front
    }

    /// Committed state for reading and scratch buffer for writing
    pub fn split(&mut self) -> (&[f64], &mut [f64]) {
        (self.front.as_slice(), self.back.as_mut_slice())
    }

    /// Commit the scratch buffer as the new state
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }
}
