//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

use crate::core::constants::{NEGATIVE_BAND_MAX, POSITIVE_BAND_MIN};

/// Node identity: an index into the state vector and the adjacency lists
pub type NodeId = usize;

/// Simulation step counter
pub type Step = u64;

/// Ternary classification band of a single node's state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TernaryBand {
    /// Autonomous: state > 1.5
    #[serde(rename = "+1")]
    Positive,
    /// Neutral: 0.8 <= state <= 1.5
    #[serde(rename = "0")]
    Neutral,
    /// Collapsed: state < 0.8
    #[serde(rename = "-1")]
    Negative,
}

impl TernaryBand {
    /// Band a state value falls in; the three bands cover every value
    pub fn of(state: f64) -> Self {
        if state > POSITIVE_BAND_MIN {
            Self::Positive
        } else if state < NEGATIVE_BAND_MAX {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}
