//! Synthetic idea trajectories on the unit sphere
//!
//! Three generators stand in for the kinds of trajectory the metrics are
//! meant to separate: wandering (human-like), converging (AI-like) and
//! memoryless (random).

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::core::error::{DaissError, Result};
use crate::metrics::radius::{semantic_radius, DEFAULT_WINDOW};
use crate::metrics::robustness::kripkean_robustness;
use crate::metrics::vector::normalize;

/// Step noise for human-like trajectories
pub const DEFAULT_NOISE: f64 = 0.3;

/// Weight kept on the current point by AI-like trajectories
const AI_INERTIA: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrajectoryKind {
    /// Random-walk jumps of size `noise`
    Human,
    /// Exponential pull back toward the starting direction
    Ai,
    /// Independent fresh direction every step
    Random,
}

impl TrajectoryKind {
    pub const ALL: [TrajectoryKind; 3] = [Self::Human, Self::Ai, Self::Random];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Human => "Human-like",
            Self::Ai => "AI-like",
            Self::Random => "Random",
        }
    }
}

fn sample_vec<R: Rng + ?Sized>(normal: &Normal<f64>, dim: usize, rng: &mut R) -> Vec<f64> {
    (0..dim).map(|_| normal.sample(rng)).collect()
}

/// Generate `steps` normalized points of dimension `dim`
///
/// A negative or non-finite `noise` is rejected before anything is drawn.
pub fn generate_trajectory<R: Rng + ?Sized>(
    kind: TrajectoryKind,
    steps: usize,
    dim: usize,
    noise: f64,
    rng: &mut R,
) -> Result<Vec<Vec<f64>>> {
    let unit = Normal::new(0.0, 1.0)?;
    let jump = Normal::new(0.0, noise)?;

    let base = normalize(&sample_vec(&unit, dim, rng));
    let mut current = base.clone();
    let mut trajectory = Vec::with_capacity(steps);

    for _ in 0..steps {
        current = match kind {
            TrajectoryKind::Human => {
                let jump = sample_vec(&jump, dim, rng);
                current.iter().zip(&jump).map(|(c, j)| c + j).collect()
            }
            TrajectoryKind::Ai => current
                .iter()
                .zip(&base)
                .map(|(c, b)| AI_INERTIA * c + (1.0 - AI_INERTIA) * b)
                .collect(),
            TrajectoryKind::Random => sample_vec(&unit, dim, rng),
        };
        current = normalize(&current);
        trajectory.push(current.clone());
    }

    Ok(trajectory)
}

/// One trajectory summarized as a point in (radius, robustness) space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub kind: TrajectoryKind,
    pub semantic_radius: f64,
    pub robustness: f64,
    pub mean_similarity: f64,
    pub variance: f64,
}

/// Generate a trajectory and place it in (radius, robustness) space
///
/// The radius is the final windowed radius; robustness compares the final
/// point against every earlier one (or against itself for a single point).
pub fn simulate_point<R: Rng + ?Sized>(
    kind: TrajectoryKind,
    steps: usize,
    dim: usize,
    rng: &mut R,
) -> Result<TrajectoryPoint> {
    let trajectory = generate_trajectory(kind, steps, dim, DEFAULT_NOISE, rng)?;
    let Some((idea, earlier)) = trajectory.split_last() else {
        return Err(DaissError::EmptyInput("trajectory has no points".into()));
    };

    let radii = semantic_radius(&trajectory, DEFAULT_WINDOW)?;
    let contexts = if earlier.is_empty() {
        &trajectory[..]
    } else {
        earlier
    };
    let robustness = kripkean_robustness(idea, contexts)?;

    Ok(TrajectoryPoint {
        kind,
        semantic_radius: radii.last().copied().unwrap_or_default(),
        robustness: robustness.robustness,
        mean_similarity: robustness.mean_similarity,
        variance: robustness.variance,
    })
}
