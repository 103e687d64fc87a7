//! Semantic radius: windowed dispersion of a trajectory

use crate::core::error::{DaissError, Result};
use crate::metrics::vector::{centroid, check_dimensions, distance};

/// Window used by the protocol report
pub const DEFAULT_WINDOW: usize = 5;

/// Semantic radius `E_t` for every point of a trajectory
///
/// `E_t` is the mean distance of the points in `[t - window + 1, t]` from
/// their centroid. Early points use the shorter window available, so the
/// first value is always 0. The output has one entry per input point.
pub fn semantic_radius(trajectory: &[Vec<f64>], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(DaissError::InvalidConfig("window must be positive".into()));
    }
    let Some(first) = trajectory.first() else {
        return Ok(Vec::new());
    };
    check_dimensions(trajectory, first.len())?;

    let radii = (0..trajectory.len())
        .map(|t| {
            let start = (t + 1).saturating_sub(window);
            let points = &trajectory[start..=t];
            let center = centroid(points);
            points.iter().map(|p| distance(p, &center)).sum::<f64>() / points.len() as f64
        })
        .collect();

    Ok(radii)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_matches_trajectory() {
        let traj: Vec<Vec<f64>> = (0..12).map(|i| vec![i as f64, 0.0]).collect();
        assert_eq!(semantic_radius(&traj, 5).unwrap().len(), 12);
    }

    #[test]
    fn test_first_point_has_zero_radius() {
        let traj = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(semantic_radius(&traj, 5).unwrap()[0], 0.0);
    }

    #[test]
    fn test_stationary_trajectory_has_zero_radius() {
        let traj = vec![vec![0.5, 0.5]; 8];
        assert!(semantic_radius(&traj, 3).unwrap().iter().all(|&r| r == 0.0));
    }

    #[test]
    fn test_window_limits_history() {
        // Points on a line 0, 1, 2, 3: window 2 always sees a pair 1 apart
        let traj: Vec<Vec<f64>> = (0..4).map(|i| vec![i as f64]).collect();
        let radii = semantic_radius(&traj, 2).unwrap();
        assert_eq!(radii, vec![0.0, 0.5, 0.5, 0.5]);

        // Window 4 at t = 3 sees all four points around 1.5
        let radii = semantic_radius(&traj, 4).unwrap();
        assert!((radii[3] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_and_invalid_input() {
        assert!(semantic_radius(&[], 5).unwrap().is_empty());
        assert!(semantic_radius(&[vec![1.0]], 0).is_err());
        assert!(semantic_radius(&[vec![1.0], vec![1.0, 2.0]], 5).is_err());
    }
}
