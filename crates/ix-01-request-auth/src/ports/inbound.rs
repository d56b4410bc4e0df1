//! # Inbound Ports (Driving Ports / API)
//!
//! Trait that the HTTP boundary uses to authenticate requests.

use crate::domain::entities::{AuthResult, SignedRequest};

/// Request Authentication API.
///
/// Implementations must be thread-safe (`Send + Sync`) and must never panic
/// on malformed input: every failure is an [`AuthResult::Rejected`].
pub trait RequestAuthenticationApi: Send + Sync {
    /// Authenticate one inbound request.
    fn authenticate(&self, request: &SignedRequest) -> AuthResult;
}
