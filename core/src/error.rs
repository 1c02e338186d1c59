use crate::types::CandidateIdError;
use thiserror::Error;

/// Message the view shows in place of results after a failed search.
pub const RETRY_MESSAGE: &str = "Search failed, try again";

/// Why a search produced no usable result list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("search failed: {0}")]
    Failed(String),

    #[error("search timed out")]
    TimedOut,

    #[error("search worker is no longer running")]
    WorkerGone,
}

impl SearchError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// User-facing text. Backend details stay in logs.
    pub fn user_message(&self) -> &'static str {
        RETRY_MESSAGE
    }
}

#[derive(Error, Debug)]
pub enum CandidateError {
    #[error("invalid candidate payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid candidate id: {0}")]
    InvalidId(#[from] CandidateIdError),
}

/// Errors that can occur when loading or saving config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
