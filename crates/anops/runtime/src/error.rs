//! Error types for the pipeline session.

use anops_front::FrontError;
use anops_types::CategoryError;
use thiserror::Error;

/// Errors a pipeline run or session setup can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// Strict mode only: a category tag had no table entry.
    #[error(transparent)]
    UnrecognizedCategory(#[from] CategoryError),

    #[error("unknown generator: {0}")]
    UnknownGenerator(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<FrontError> for PipelineError {
    fn from(err: FrontError) -> Self {
        match err {
            FrontError::UnknownGenerator(name) => Self::UnknownGenerator(name),
        }
    }
}

impl From<config::ConfigError> for PipelineError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
