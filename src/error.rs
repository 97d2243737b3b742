//! Errors raised by individual source strategies.
//!
//! None of these ever reach a feed consumer: the
//! [`FallbackOrchestrator`](crate::orchestrator::FallbackOrchestrator) treats
//! every variant as "try the next source".

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SourceError>;

#[derive(Debug, Error)]
pub enum SourceError {
    /// Network failure, non-success status, unexpected payload shape, a
    /// timed-out attempt, or an empty result.
    #[error("source unavailable: {0}")]
    Unavailable(String),

    /// A required setting (currently only the paid API credential) is missing.
    #[error("source misconfigured: {0}")]
    Misconfigured(String),
}

impl SourceError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        SourceError::Unavailable(msg.into())
    }

    pub fn misconfigured(msg: impl Into<String>) -> Self {
        SourceError::Misconfigured(msg.into())
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Unavailable(format!("network error: {err}"))
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Unavailable(format!("malformed body: {err}"))
    }
}
