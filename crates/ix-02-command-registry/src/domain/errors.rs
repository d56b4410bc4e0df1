//! # Command Errors
//!
//! Error types for registration, dispatch, handlers and bulk sync.

use crate::ports::outbound::PlatformError;
use shared_types::{PayloadError, ReplyKind};
use thiserror::Error;

/// Errors returned by `RegistryBuilder::register`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Command names must be non-empty.
    #[error("command name must not be empty")]
    EmptyName,

    /// Name already registered and the builder is strict.
    #[error("command '{0}' is already registered")]
    DuplicateName(String),
}

/// Errors returned by dispatch.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The payload does not name a command.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] PayloadError),

    /// No registered command has this name.
    #[error("command not found: {0}")]
    CommandNotFound(String),

    /// The handler produced a reply kind other than the one it declared.
    #[error("{returned} is not supported as a return type for a handler declared as {declared}")]
    UnsupportedReturnType {
        declared: ReplyKind,
        returned: ReplyKind,
    },

    /// The handler itself failed.
    #[error("handler for '{command}' failed: {source}")]
    Handler {
        command: String,
        #[source]
        source: HandlerError,
    },
}

/// Errors raised inside command handlers.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The interaction lacks data the handler needs.
    #[error("invalid interaction: {0}")]
    InvalidInteraction(String),

    /// Bulk command sync failed.
    #[error(transparent)]
    Sync(#[from] SyncError),

    /// Any other failure.
    #[error("{0}")]
    Failed(String),
}

/// Errors from bulk command sync.
#[derive(Debug, Error)]
pub enum SyncError {
    /// No application id configured.
    #[error("application id is not configured")]
    MissingApplicationId,

    /// The platform call failed or timed out.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] PlatformError),

    /// Request body could not be encoded.
    #[error("failed to encode command list: {0}")]
    Encode(String),
}
