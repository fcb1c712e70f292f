//! The record of one completed pipeline run.

use anops_front::GeneratorKind;
use anops_types::{ApiCall, Constraints, Decision, Effect, Intent, Koi, Kpi, StandardEvent};
use serde::{Deserialize, Serialize};

/// Unique identifier for a pipeline run.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub String);

impl RunId {
    /// Generate a new unique run ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "run:{}", self.0)
    }
}

/// Every intermediate product of one pass through the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineRun {
    pub id: RunId,
    /// `None` when the input was supplied directly instead of generated.
    pub generator: Option<GeneratorKind>,
    pub standard_event: StandardEvent,
    pub intent: Intent,
    pub constraints: Constraints,
    pub decision: Decision,
    pub api_calls: Vec<ApiCall>,
    pub kpi: Kpi,
    pub koi: Koi,
    pub effects: Vec<Effect>,
}
