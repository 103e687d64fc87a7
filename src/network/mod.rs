//! Interaction network: topology and node state
//!
//! The graph and the initial state are both drawn from one seeded random
//! source, topology first, so a seed fully determines the starting point.

pub mod state;
pub mod topology;

pub use state::{initial_state, StateBuffers};
pub use topology::{barabasi_albert, Graph};
