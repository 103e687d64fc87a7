//! Small dense-vector helpers shared by the trajectory metrics

use crate::core::error::{DaissError, Result};

/// Guard added to norms before dividing
pub const NORM_EPSILON: f64 = 1e-8;

pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

pub fn norm(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}

/// `v / (|v| + 1e-8)`; a zero vector stays zero
pub fn normalize(v: &[f64]) -> Vec<f64> {
    let scale = norm(v) + NORM_EPSILON;
    v.iter().map(|x| x / scale).collect()
}

pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Component-wise mean of a non-empty set of equal-length vectors
pub fn centroid(vectors: &[Vec<f64>]) -> Vec<f64> {
    let dim = vectors.first().map_or(0, Vec::len);
    let mut sum = vec![0.0; dim];
    for v in vectors {
        for (acc, x) in sum.iter_mut().zip(v) {
            *acc += x;
        }
    }
    let n = vectors.len().max(1) as f64;
    sum.iter_mut().for_each(|x| *x /= n);
    sum
}

/// Check every vector has `expected` components
pub fn check_dimensions<'a>(
    vectors: impl IntoIterator<Item = &'a Vec<f64>>,
    expected: usize,
) -> Result<()> {
    for v in vectors {
        if v.len() != expected {
            return Err(DaissError::DimensionMismatch {
                expected,
                found: v.len(),
            });
        }
    }
    Ok(())
}

/// Population mean and variance
pub fn mean_variance(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    (mean, variance)
}
