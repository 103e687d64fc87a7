//! Sovereignty simulation
//!
//! Build a `Simulation` from a config, `run` it to get a `History`, and feed
//! the history to `evaluate_heartbeat` for a verdict. The evaluator is a free
//! function of the history, so it can be used without a simulation.

pub mod engine;
pub mod heartbeat;
pub mod history;
pub mod output;
pub mod step;
pub mod sweep;

pub use engine::Simulation;
pub use heartbeat::{
    evaluate_heartbeat, system_sanity, theoretical_compliance, Compliance, HeartbeatResult,
    HeartbeatStatus,
};
pub use history::{fork_intensity, History, StepRecord, Ternary};
pub use output::VerificationReport;
pub use step::{step_into, ReactionParams};
pub use sweep::{sweep, SweepOutcome};
