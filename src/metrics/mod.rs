//! Trajectory metrics
//!
//! Independent of the graph simulation: these functions score sequences of
//! embedding-like vectors by dispersion (semantic radius) and by the
//! stability of their similarity to a reference set (Kripkean robustness).

pub mod entropy;
pub mod protocol;
pub mod radius;
pub mod robustness;
pub mod trajectory;
pub mod vector;

pub use entropy::normalized_entropy_diff;
pub use protocol::{compute_protocol_metrics, ProtocolEvaluation, ProtocolMetrics, ProtocolReport, Quadrant};
pub use radius::semantic_radius;
pub use robustness::{kripkean_robustness, Robustness};
pub use trajectory::{generate_trajectory, simulate_point, TrajectoryKind, TrajectoryPoint};
