//! # Error Types
//!
//! Errors raised when an inbound payload does not have the shape a caller
//! relies on.

use thiserror::Error;

/// The interaction payload is missing a field required by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// `data` object absent.
    #[error("interaction has no data object")]
    MissingData,

    /// `data.name` absent.
    #[error("interaction data has no command name")]
    MissingCommandName,

    /// Body is not a valid interaction document.
    #[error("invalid interaction JSON: {0}")]
    InvalidJson(String),
}

impl From<serde_json::Error> for PayloadError {
    fn from(e: serde_json::Error) -> Self {
        PayloadError::InvalidJson(e.to_string())
    }
}
