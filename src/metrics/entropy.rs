//! Normalized entropy difference between two distributions

use crate::core::error::{DaissError, Result};

/// Shannon entropy (nats) of a distribution given as non-negative weights
///
/// Weights are normalized first; zero weights contribute nothing.
pub fn shannon_entropy(weights: &[f64]) -> Result<f64> {
    let total: f64 = weights.iter().sum();
    if weights.is_empty() || !(total > 0.0) {
        return Err(DaissError::EmptyInput(
            "distribution must have positive total weight".into(),
        ));
    }
    if weights.iter().any(|w| *w < 0.0) {
        return Err(DaissError::InvalidConfig(
            "distribution weights must be non-negative".into(),
        ));
    }

    Ok(weights
        .iter()
        .map(|w| w / total)
        .filter(|&p| p > 0.0)
        .map(|p| -p * p.ln())
        .sum())
}

/// Positive part of `(H(human) - H(ai)) / max(H(human), H(ai))`
///
/// Only a human distribution that is more spread out than the AI one
/// scores above zero. Two point-mass distributions score 0.
pub fn normalized_entropy_diff(human: &[f64], ai: &[f64]) -> Result<f64> {
    let h_human = shannon_entropy(human)?;
    let h_ai = shannon_entropy(ai)?;

    let scale = h_human.max(h_ai);
    if scale <= 0.0 {
        return Ok(0.0);
    }

    Ok(((h_human - h_ai) / scale).max(0.0))
}
