//! Gateway error types and their HTTP mapping.
//!
//! Every error except the signature rejection is answered with
//! `{"error": {"code": ..., "message": ...}}`. The rejection is a bare text
//! body so it reveals nothing about which check failed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ix_01_request_auth::REJECTION_MESSAGE;
use ix_02_command_registry::DispatchError;
use shared_types::{InteractionType, PayloadError};
use std::fmt;
use tracing::error;

/// Machine-readable error codes
pub mod codes {
    pub const BAD_SIGNATURE: &str = "BAD_SIGNATURE";
    pub const MALFORMED_PAYLOAD: &str = "MALFORMED_PAYLOAD";
    pub const COMMAND_NOT_FOUND: &str = "COMMAND_NOT_FOUND";
    pub const NOT_IMPLEMENTED: &str = "NOT_IMPLEMENTED";
    pub const PAYLOAD_TOO_LARGE: &str = "PAYLOAD_TOO_LARGE";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Error answered to the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// The uniform signature rejection (401).
    pub fn unauthorized() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            codes::BAD_SIGNATURE,
            REJECTION_MESSAGE,
        )
    }

    /// Body is not valid JSON or lacks required fields (400).
    pub fn malformed(details: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            codes::MALFORMED_PAYLOAD,
            format!("Malformed payload: {}", details.into()),
        )
    }

    /// No command registered under `name` (404).
    pub fn command_not_found(name: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            codes::COMMAND_NOT_FOUND,
            format!("Command not found: {}", name),
        )
    }

    /// Interaction type without a route (501).
    pub fn not_implemented(kind: InteractionType) -> Self {
        Self::new(
            StatusCode::NOT_IMPLEMENTED,
            codes::NOT_IMPLEMENTED,
            format!("Interaction type {} is not implemented", kind),
        )
    }

    /// Body over the configured limit (413).
    pub fn payload_too_large(limit: usize) -> Self {
        Self::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            codes::PAYLOAD_TOO_LARGE,
            format!("Request body exceeds {} bytes", limit),
        )
    }

    /// Anything the platform cannot act on (500).
    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            codes::INTERNAL_ERROR,
            format!("Internal error: {}", details.into()),
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status == StatusCode::UNAUTHORIZED {
            return (self.status, REJECTION_MESSAGE).into_response();
        }

        let body = serde_json::json!({
            "error": {
                "code": self.code,
                "message": self.message,
            }
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<PayloadError> for ApiError {
    fn from(e: PayloadError) -> Self {
        ApiError::malformed(e.to_string())
    }
}

impl From<DispatchError> for ApiError {
    fn from(e: DispatchError) -> Self {
        match e {
            DispatchError::MalformedPayload(inner) => inner.into(),
            DispatchError::CommandNotFound(name) => ApiError::command_not_found(&name),
            DispatchError::UnsupportedReturnType { .. } => {
                error!(error = %e, "Handler returned an unsupported reply");
                ApiError::internal(e.to_string())
            }
            DispatchError::Handler { ref command, .. } => {
                error!(command = %command, error = %e, "Command handler failed");
                ApiError::internal(format!("command '{}' failed", command))
            }
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Gateway-level errors (startup and serving)
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),

    /// The server stopped with an I/O error
    #[error("server error: {0}")]
    Serve(String),
}
