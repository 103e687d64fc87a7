//! DAISS - Sovereignty dynamics on scale-free networks
//!
//! Simulates a population of nodes whose scalar sovereignty state evolves
//! under a reaction-diffusion law over a preferential-attachment graph, and
//! classifies the aggregate behavior with a heartbeat verdict. A separate
//! metrics module scores idea trajectories by semantic radius and Kripkean
//! robustness.

pub mod core;
pub mod metrics;
pub mod network;
pub mod simulation;
