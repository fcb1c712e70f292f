use thiserror::Error;

/// Errors from the front stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontError {
    #[error("unknown generator: {0}")]
    UnknownGenerator(String),
}

/// Result type for front-stage operations.
pub type FrontResult<T> = Result<T, FrontError>;
