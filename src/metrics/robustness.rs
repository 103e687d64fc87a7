//! Kripkean robustness: stability of a vector's similarity to references

use serde::{Deserialize, Serialize};

use crate::core::error::{DaissError, Result};
use crate::metrics::vector::{check_dimensions, dot, mean_variance, normalize};

/// Added to the variance so identical similarities stay finite
pub const VARIANCE_EPSILON: f64 = 1e-6;

/// Robustness `R_t` and the statistics behind it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Robustness {
    /// `mean_similarity / (variance + 1e-6)`
    pub robustness: f64,
    pub mean_similarity: f64,
    pub variance: f64,
}

/// Cosine similarity of `current` to each reference, summarized as
/// mean over variance
pub fn kripkean_robustness(current: &[f64], references: &[Vec<f64>]) -> Result<Robustness> {
    if references.is_empty() {
        return Err(DaissError::EmptyInput("reference set".into()));
    }
    check_dimensions(references, current.len())?;

    let v = normalize(current);
    let similarities: Vec<f64> = references
        .iter()
        .map(|reference| dot(&v, &normalize(reference)))
        .collect();

    let (mean_similarity, variance) = mean_variance(&similarities);

    Ok(Robustness {
        robustness: mean_similarity / (variance + VARIANCE_EPSILON),
        mean_similarity,
        variance,
    })
}
