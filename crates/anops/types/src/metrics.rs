//! Measurement and outcome records.

use serde::{Deserialize, Serialize};

/// Key performance indicators: raw technical measurements.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub latency_ms: f64,
    pub loss_rate: f64,
    pub jitter_ms: f64,
    /// Coverage ratio (0.0 - 1.0)
    pub coverage: f64,
}

/// Key outcome indicators derived from KPIs and the decision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Koi {
    pub operational_goal_score: f64,
    pub cost_efficiency: f64,
    pub stability_index: f64,
}

/// Human-readable explanation of one configuration change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub title: String,
    pub description: String,
}
