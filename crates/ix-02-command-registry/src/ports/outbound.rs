//! # Outbound Ports (Driven Ports / SPI)
//!
//! What this subsystem needs from the chat platform's REST API.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// HTTP verb of an outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Successful (2xx) response from the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformResponse {
    pub status: u16,
    /// Decoded JSON body; `Value::Null` when the body was empty.
    pub body: Value,
}

/// Error from platform REST calls.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The request did not complete within the configured timeout.
    #[error("Platform request timed out")]
    Timeout,

    /// The platform answered with a non-2xx status.
    #[error("Platform returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection or protocol failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A 2xx body that is not JSON.
    #[error("Failed to decode platform response: {0}")]
    Decode(String),

    /// The client is missing required configuration.
    #[error("Platform client misconfigured: {0}")]
    Config(String),
}

/// Gateway to the platform REST API.
///
/// "Send an authenticated JSON request to endpoint E." Implementations add
/// the credentials; callers pass endpoint paths relative to the API base.
#[async_trait::async_trait]
pub trait PlatformApi: Send + Sync {
    /// Send one request.
    ///
    /// # Errors
    /// * `PlatformError::Timeout` - no answer within the timeout
    /// * `PlatformError::Status` - non-2xx answer, never retried
    async fn send(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<PlatformResponse, PlatformError>;
}
