use thiserror::Error;

use crate::models::{CollegeCriteria, CriteriaError};

/// Errors that can occur while resolving a college's criteria
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("stats page returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("stats page is missing the {0} field")]
    MissingField(&'static str),

    #[error("stats page field {field} is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("stats page describes invalid criteria: {0}")]
    InvalidCriteria(#[from] CriteriaError),

    #[error("unknown college: {0}")]
    UnknownCollege(String),
}

impl SourceError {
    /// Whether the fallback criteria may stand in for this failure
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SourceError::UnknownCollege(_))
    }

    /// Short label distinguishing network trouble from a bad document
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Transport(_) | SourceError::Status(_) => "network error",
            SourceError::MissingField(_)
            | SourceError::InvalidNumber { .. }
            | SourceError::InvalidCriteria(_) => "malformed stats page",
            SourceError::UnknownCollege(_) => "unknown college",
        }
    }
}

/// Resolves a college name to its admission criteria
#[allow(async_fn_in_trait)]
pub trait CriteriaSource {
    async fn resolve(&self, college: &str) -> Result<CollegeCriteria, SourceError>;
}
