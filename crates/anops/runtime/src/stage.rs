use serde::{Deserialize, Serialize};

/// Where a session is in its run cycle.
///
/// Runs are synchronous and take `&mut Session`, so callers only ever
/// observe `Idle` or `Completed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStage {
    /// No run has completed yet.
    #[default]
    Idle,
    /// A run is in progress. Internal to [`Session`](crate::Session) runs;
    /// a rejected run restores the previous stage.
    Processing,
    /// The last run completed.
    Completed,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Processing => write!(f, "processing"),
            Self::Completed => write!(f, "completed"),
        }
    }
}
