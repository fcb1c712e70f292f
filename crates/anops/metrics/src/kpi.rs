//! KPI observation for a simulated network.

use anops_types::{Decision, Kpi};
use serde::{Deserialize, Serialize};

/// Fixed link characteristics of the simulated network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiProfile {
    #[serde(default = "default_loss_rate")]
    pub loss_rate: f64,
    #[serde(default = "default_jitter_ms")]
    pub jitter_ms: f64,
    #[serde(default = "default_coverage")]
    pub coverage: f64,
}

impl Default for KpiProfile {
    fn default() -> Self {
        Self {
            loss_rate: default_loss_rate(),
            jitter_ms: default_jitter_ms(),
            coverage: default_coverage(),
        }
    }
}

fn default_loss_rate() -> f64 {
    0.001
}

fn default_jitter_ms() -> f64 {
    2.5
}

fn default_coverage() -> f64 {
    0.98
}

impl KpiProfile {
    /// KPI snapshot after applying `decision`: latency meets the target exactly.
    pub fn observe(&self, decision: &Decision) -> Kpi {
        Kpi {
            latency_ms: f64::from(decision.target_latency),
            loss_rate: self.loss_rate,
            jitter_ms: self.jitter_ms,
            coverage: self.coverage,
        }
    }
}
