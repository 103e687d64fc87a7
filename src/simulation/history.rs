//! Per-step statistics and the run history

use serde::{Deserialize, Serialize};

use crate::core::constants::{FORK_DIVISOR, FORK_THRESHOLD};
use crate::core::types::TernaryBand;

/// Share of the population in each ternary band
///
/// Serializes with the band labels `"+1"`, `"0"` and `"-1"` as keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ternary {
    #[serde(rename = "+1")]
    pub positive: f64,
    #[serde(rename = "0")]
    pub neutral: f64,
    #[serde(rename = "-1")]
    pub negative: f64,
}

impl Ternary {
    /// Classify a state vector into band shares
    ///
    /// An empty state yields all-zero shares.
    pub fn classify(state: &[f64]) -> Self {
        if state.is_empty() {
            return Self::default();
        }

        let mut counts = [0usize; 3];
        for &s in state {
            let slot = match TernaryBand::of(s) {
                TernaryBand::Positive => 0,
                TernaryBand::Neutral => 1,
                TernaryBand::Negative => 2,
            };
            counts[slot] += 1;
        }

        let n = state.len() as f64;
        Self {
            positive: counts[0] as f64 / n,
            neutral: counts[1] as f64 / n,
            negative: counts[2] as f64 / n,
        }
    }

    pub fn total(&self) -> f64 {
        self.positive + self.neutral + self.negative
    }
}

/// Fork intensity: count of nodes above the fork threshold over a fixed divisor
pub fn fork_intensity(state: &[f64]) -> f64 {
    state.iter().filter(|&&s| s > FORK_THRESHOLD).count() as f64 / FORK_DIVISOR
}

/// Statistics derived from the state right after one step
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub forks: f64,
    pub ternary: Ternary,
}

impl StepRecord {
    pub fn from_state(state: &[f64]) -> Self {
        Self {
            forks: fork_intensity(state),
            ternary: Ternary::classify(state),
        }
    }
}

/// Ordered, append-only record of one run
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    records: Vec<StepRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(steps: usize) -> Self {
        Self {
            records: Vec::with_capacity(steps),
        }
    }

    pub fn push(&mut self, record: StepRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&StepRecord> {
        self.records.last()
    }

    /// The last `min(len, window)` records
    pub fn tail(&self, window: usize) -> &[StepRecord] {
        let start = self.records.len().saturating_sub(window);
        &self.records[start..]
    }
}

impl FromIterator<StepRecord> for History {
    fn from_iter<I: IntoIterator<Item = StepRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
