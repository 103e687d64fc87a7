//! Sovereign state reporting protocol (v1.3)
//!
//! Places a current vector against its own context set in (E_t, R_t) space
//! and reports the relative quadrant. The report states position only: its
//! judgement and classification fields are always null.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::{DaissError, Result};
use crate::metrics::radius::{semantic_radius, DEFAULT_WINDOW};
use crate::metrics::robustness::kripkean_robustness;
use crate::metrics::vector::check_dimensions;

pub const PROTOCOL_NAME: &str = "CIFF v1.3";

/// Fixed semantic radius threshold
pub const E_THRESHOLD: f64 = 0.15;

/// Percentile of the reference robustness values used as the R threshold
pub const R_PERCENTILE: f64 = 75.0;

/// Semantic radius and robustness of one vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProtocolMetrics {
    #[serde(rename = "E_t")]
    pub e_t: f64,
    #[serde(rename = "R_t")]
    pub r_t: f64,
}

/// Metrics of `current` relative to `contexts`
///
/// `E_t` is the final windowed radius of the trajectory formed by the
/// contexts followed by `current`; `R_t` is the robustness of `current`
/// against the contexts.
pub fn compute_protocol_metrics(current: &[f64], contexts: &[Vec<f64>]) -> Result<ProtocolMetrics> {
    if contexts.is_empty() {
        return Err(DaissError::EmptyInput("context history".into()));
    }
    check_dimensions(contexts, current.len())?;

    let mut trajectory = contexts.to_vec();
    trajectory.push(current.to_vec());
    let radii = semantic_radius(&trajectory, DEFAULT_WINDOW)?;

    Ok(ProtocolMetrics {
        e_t: radii.last().copied().unwrap_or_default(),
        r_t: kripkean_robustness(current, contexts)?.robustness,
    })
}

/// Percentile with linear interpolation between closest ranks
pub fn percentile(values: &[f64], pct: f64) -> Result<f64> {
    if values.is_empty() {
        return Err(DaissError::EmptyInput("percentile of no values".into()));
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = (pct / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;

    Ok(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quadrant {
    #[serde(rename = "Upper-Right")]
    UpperRight,
    Alternative,
}

impl Quadrant {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::UpperRight => "Upper-Right Alignment",
            Self::Alternative => "Alternative Quadrant",
        }
    }
}

/// Metrics plus the thresholds they were compared against
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolEvaluation {
    pub metrics: ProtocolMetrics,
    pub reference_r_values: Vec<f64>,
    pub e_threshold: f64,
    pub r_threshold: f64,
    pub quadrant: Quadrant,
}

impl ProtocolEvaluation {
    /// Evaluate `current` against thresholds derived from its own contexts
    ///
    /// Each context vector is scored against the full context set; the
    /// 75th percentile of those scores is the R threshold.
    pub fn evaluate(current: &[f64], contexts: &[Vec<f64>]) -> Result<Self> {
        let metrics = compute_protocol_metrics(current, contexts)?;

        let reference_r_values = contexts
            .iter()
            .map(|v| compute_protocol_metrics(v, contexts).map(|m| m.r_t))
            .collect::<Result<Vec<_>>>()?;
        let r_threshold = percentile(&reference_r_values, R_PERCENTILE)?;

        let quadrant = if metrics.e_t > E_THRESHOLD && metrics.r_t > r_threshold {
            Quadrant::UpperRight
        } else {
            Quadrant::Alternative
        };

        Ok(Self {
            metrics,
            reference_r_values,
            e_threshold: E_THRESHOLD,
            r_threshold,
            quadrant,
        })
    }

    pub fn report(&self, timestamp: DateTime<Utc>) -> ProtocolReport {
        ProtocolReport {
            protocol: PROTOCOL_NAME.to_string(),
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
            metrics: self.metrics,
            relative_position: RelativePosition {
                quadrant: self.quadrant,
                reference: "local_context_75_percentile".to_string(),
            },
            sovereignty_statement: SovereigntyStatement::default(),
            note: "State report only. No normative evaluation.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativePosition {
    pub quadrant: Quadrant,
    pub reference: String,
}

/// Explicit absence of any verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SovereigntyStatement {
    pub judgement: Option<String>,
    pub classification: Option<String>,
    pub authority: String,
}

impl Default for SovereigntyStatement {
    fn default() -> Self {
        Self {
            judgement: None,
            classification: None,
            authority: "local_execution_only".to_string(),
        }
    }
}

/// JSON artifact of one protocol run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolReport {
    pub protocol: String,
    pub timestamp: String,
    pub metrics: ProtocolMetrics,
    pub relative_position: RelativePosition,
    pub sovereignty_statement: SovereigntyStatement,
    pub note: String,
}

impl ProtocolReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn contexts() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 0.0, 0.0],
            vec![0.9, 0.1, 0.0],
            vec![0.8, 0.0, 0.2],
            vec![1.0, 0.1, 0.1],
        ]
    }

    #[test]
    fn test_percentile_linear() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile(&values, 75.0).unwrap(), 4.0);
        assert_eq!(percentile(&values, 50.0).unwrap(), 3.0);
        assert_eq!(percentile(&[4.0, 1.0, 3.0, 2.0], 75.0).unwrap(), 3.25);
        assert_eq!(percentile(&[7.0], 75.0).unwrap(), 7.0);
        assert!(percentile(&[], 75.0).is_err());
    }

    #[test]
    fn test_metrics_of_far_vector() {
        let metrics = compute_protocol_metrics(&[0.0, 0.0, 5.0], &contexts()).unwrap();
        // The outlier pulls the last window apart
        assert!(metrics.e_t > 0.15);
        assert!(metrics.r_t < 10.0);
    }

    #[test]
    fn test_metrics_reject_bad_input() {
        assert!(compute_protocol_metrics(&[1.0], &[]).is_err());
        assert!(compute_protocol_metrics(&[1.0, 0.0], &contexts()).is_err());
    }

    #[test]
    fn test_close_vector_is_alternative() {
        // Sitting inside the context cluster gives a small radius
        let eval = ProtocolEvaluation::evaluate(&[0.95, 0.05, 0.05], &contexts()).unwrap();
        assert_eq!(eval.reference_r_values.len(), 4);
        assert_eq!(eval.quadrant, Quadrant::Alternative);
    }

    #[test]
    fn test_report_has_null_verdict_fields() {
        let eval = ProtocolEvaluation::evaluate(&[0.95, 0.05, 0.05], &contexts()).unwrap();
        let timestamp = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&eval.report(timestamp).to_json().unwrap()).unwrap();

        assert_eq!(json["protocol"], "CIFF v1.3");
        assert_eq!(json["timestamp"], "2026-01-02T03:04:05.000000Z");
        assert!(json["metrics"]["E_t"].is_number());
        assert!(json["metrics"]["R_t"].is_number());
        assert_eq!(json["relative_position"]["quadrant"], "Alternative");
        assert!(json["sovereignty_statement"]["judgement"].is_null());
        assert!(json["sovereignty_statement"]["classification"].is_null());
        assert_eq!(json["sovereignty_statement"]["authority"], "local_execution_only");
    }

    #[test]
    fn test_quadrant_serialization() {
        assert_eq!(
            serde_json::to_string(&Quadrant::UpperRight).unwrap(),
            "\"Upper-Right\""
        );
    }
}
