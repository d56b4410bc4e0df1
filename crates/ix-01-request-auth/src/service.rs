//! # Request Authentication Service
//!
//! Application service that implements the `RequestAuthenticationApi` trait.
//!
//! The configured public key is parsed once at construction and reused for
//! every request. A missing or unparsable key is reported at startup and
//! leaves the service in a state where every request is rejected.

use crate::domain::entities::{AuthResult, SignedRequest};
use crate::domain::verify::verify_with_key;
use crate::ports::inbound::RequestAuthenticationApi;
use shared_crypto::Ed25519PublicKey;
use tracing::{error, info, warn};

/// Request Authentication Service.
#[derive(Clone, Debug)]
pub struct RequestAuthenticator {
    public_key: Option<Ed25519PublicKey>,
}

impl RequestAuthenticator {
    /// Create a service bound to an already parsed key.
    pub fn new(public_key: Ed25519PublicKey) -> Self {
        Self {
            public_key: Some(public_key),
        }
    }

    /// Create a service from the configured hex key.
    ///
    /// Never fails: bad key material is logged and results in a service
    /// that rejects everything.
    pub fn from_config(public_key_hex: Option<&str>) -> Self {
        let public_key = match public_key_hex.map(str::trim) {
            Some(hex_key) => match Ed25519PublicKey::from_hex(hex_key) {
                Ok(key) => {
                    info!(public_key = %key.to_hex(), "Loaded request verification key");
                    Some(key)
                }
                Err(e) => {
                    error!(error = %e, "Configured public key is invalid; all requests will be rejected");
                    None
                }
            },
            None => {
                warn!("No public key configured; all requests will be rejected");
                None
            }
        };

        Self { public_key }
    }

    /// Whether a usable key is configured.
    pub fn has_key(&self) -> bool {
        self.public_key.is_some()
    }
}

impl RequestAuthenticationApi for RequestAuthenticator {
    fn authenticate(&self, request: &SignedRequest) -> AuthResult {
        verify_with_key(
            &request.raw_body,
            request.signature_hex.as_deref(),
            request.timestamp.as_deref(),
            self.public_key.as_ref(),
        )
    }
}
