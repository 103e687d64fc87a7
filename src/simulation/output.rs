//! Verification report and serialization

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::simulation::heartbeat::{Compliance, HeartbeatResult};

/// Heartbeat metrics plus both compliance verdicts
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub metrics: HeartbeatResult,
    pub compliance: Compliance,
}

impl VerificationReport {
    pub fn new(metrics: HeartbeatResult) -> Self {
        Self {
            compliance: Compliance::assess(&metrics),
            metrics,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as JSON, creating parent directories as needed
    ///
    /// The report is an owned copy, so a failed write leaves the simulation
    /// that produced it untouched.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn summary(&self) -> String {
        format!(
            "Mean Forks: {:.4}\nTernary [+1]: {:.4}\nTheoretical Compliance: {}\nSystem Sanity: {}",
            self.metrics.mean_forks,
            self.metrics.ternary.positive,
            self.compliance.theoretical,
            self.compliance.system,
        )
    }
}
