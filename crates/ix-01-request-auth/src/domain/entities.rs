//! # Domain Entities
//!
//! Core data structures for request authentication.

use bytes::Bytes;

/// Header carrying the hex-encoded Ed25519 signature.
pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";

/// Header carrying the timestamp that prefixes the signed message.
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

/// HTTP status of every rejection.
pub const REJECTION_STATUS: u16 = 401;

/// Body of every rejection.
pub const REJECTION_MESSAGE: &str = "Bad request signature";

/// An inbound request as seen by the authenticator.
///
/// Built once per HTTP request. `raw_body` holds the exact bytes received;
/// the headers are optional because their absence must be rejected, not
/// treated as a reason to skip verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedRequest {
    /// Exact request body bytes.
    pub raw_body: Bytes,
    /// Value of `X-Signature-Ed25519`.
    pub signature_hex: Option<String>,
    /// Value of `X-Signature-Timestamp`.
    pub timestamp: Option<String>,
}

impl SignedRequest {
    pub fn new(
        raw_body: impl Into<Bytes>,
        signature_hex: Option<String>,
        timestamp: Option<String>,
    ) -> Self {
        Self {
            raw_body: raw_body.into(),
            signature_hex,
            timestamp,
        }
    }
}

/// Outcome of authenticating a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthResult {
    /// Signature verified; the request may proceed.
    Authenticated,
    /// Request must be answered with `http_status` and `message`.
    Rejected {
        http_status: u16,
        message: &'static str,
    },
}

impl AuthResult {
    /// The uniform rejection.
    pub fn rejected() -> Self {
        AuthResult::Rejected {
            http_status: REJECTION_STATUS,
            message: REJECTION_MESSAGE,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthResult::Authenticated)
    }
}
