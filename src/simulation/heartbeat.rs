//! Heartbeat evaluation over a run history
//!
//! The heartbeat is a pure function of the history: the mean fork index over
//! the trailing window and the final ternary split decide the verdict.

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    HEALTHY_FORKS_MAX, HEALTHY_FORKS_MIN, HEALTHY_POSITIVE_MIN, HEARTBEAT_WINDOW,
    SANITY_FORKS_MIN, SANITY_POSITIVE_MIN,
};
use crate::simulation::history::{History, Ternary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeartbeatStatus {
    Healthy,
    Unhealthy,
}

impl HeartbeatStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}

/// Verdict plus the statistics it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartbeatResult {
    pub status: HeartbeatStatus,
    pub mean_forks: f64,
    pub ternary: Ternary,
}

/// Evaluate the heartbeat of a history
///
/// An empty history has no window to average: it reports `mean_forks = 0.0`,
/// an all-zero ternary split and `Unhealthy`.
pub fn evaluate_heartbeat(history: &History) -> HeartbeatResult {
    let window = history.tail(HEARTBEAT_WINDOW);
    let mean_forks = if window.is_empty() {
        0.0
    } else {
        window.iter().map(|r| r.forks).sum::<f64>() / window.len() as f64
    };
    let ternary = history.last().map(|r| r.ternary).unwrap_or_default();

    let status = if is_healthy(mean_forks, &ternary) {
        HeartbeatStatus::Healthy
    } else {
        HeartbeatStatus::Unhealthy
    };

    HeartbeatResult {
        status,
        mean_forks,
        ternary,
    }
}

/// `2.0 <= mean_forks <= 5.0` and at least 15% of nodes in the "+1" band
fn is_healthy(mean_forks: f64, ternary: &Ternary) -> bool {
    (HEALTHY_FORKS_MIN..=HEALTHY_FORKS_MAX).contains(&mean_forks)
        && ternary.positive >= HEALTHY_POSITIVE_MIN
}

/// Theoretical compliance: the heartbeat's own health predicate
pub fn theoretical_compliance(result: &HeartbeatResult) -> bool {
    is_healthy(result.mean_forks, &result.ternary)
}

/// System sanity: the population is alive and not collapsed
///
/// Much looser than theoretical compliance; failing it means the dynamics
/// themselves are broken.
pub fn system_sanity(result: &HeartbeatResult) -> bool {
    result.mean_forks > SANITY_FORKS_MIN && result.ternary.positive > SANITY_POSITIVE_MIN
}

/// Both compliance checks for one heartbeat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compliance {
    pub theoretical: bool,
    pub system: bool,
}

impl Compliance {
    pub fn assess(result: &HeartbeatResult) -> Self {
        Self {
            theoretical: theoretical_compliance(result),
            system: system_sanity(result),
        }
    }
}
