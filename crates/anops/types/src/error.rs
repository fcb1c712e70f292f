//! Error types shared by every pipeline stage.

use thiserror::Error;

/// A category tag that none of the fixed lookup tables recognise.
///
/// The pipeline falls back to a default silently unless strict category
/// handling is enabled; in strict mode this error is reported instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("unrecognized {category}: {value:?}")]
    Unrecognized {
        /// Which table missed (e.g. "event type").
        category: &'static str,
        /// The offending tag.
        value: String,
    },
}

impl CategoryError {
    /// Build an `Unrecognized` error for the given table and tag.
    pub fn unrecognized(category: &'static str, value: impl Into<String>) -> Self {
        Self::Unrecognized {
            category,
            value: value.into(),
        }
    }
}

/// Result type for category lookups.
pub type CategoryResult<T> = Result<T, CategoryError>;
