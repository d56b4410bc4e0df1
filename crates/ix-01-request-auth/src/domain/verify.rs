//! # Signature Verification
//!
//! Pure functions deciding whether a request was signed by the platform.
//!
//! The reason for a rejection is only ever logged at `debug` level; callers
//! see the same [`AuthResult::rejected`] for every failure so no check can be
//! probed individually.

use crate::domain::entities::AuthResult;
use shared_crypto::{CryptoError, Ed25519PublicKey, Ed25519Signature};
use std::fmt;
use tracing::debug;

/// Why a request was rejected. Internal; never surfaced to the caller.
#[derive(Debug)]
enum RejectReason {
    MissingPublicKey,
    MissingSignature,
    MissingTimestamp,
    PublicKey(CryptoError),
    Signature(CryptoError),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::MissingPublicKey => write!(f, "no public key configured"),
            RejectReason::MissingSignature => write!(f, "missing signature header"),
            RejectReason::MissingTimestamp => write!(f, "missing timestamp header"),
            RejectReason::PublicKey(e) => write!(f, "unusable public key: {e}"),
            RejectReason::Signature(e) => write!(f, "bad signature: {e}"),
        }
    }
}

/// Build the signed message: `timestamp` bytes followed by the body bytes.
pub fn signed_message(timestamp: &str, raw_body: &[u8]) -> Vec<u8> {
    let mut message = Vec::with_capacity(timestamp.len() + raw_body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(raw_body);
    message
}

/// Verify a request against a hex-encoded public key.
///
/// A missing or malformed key is a configuration problem, but it still
/// produces the ordinary rejection instead of an error or panic.
pub fn verify(
    raw_body: &[u8],
    signature_hex: Option<&str>,
    timestamp: Option<&str>,
    public_key_hex: Option<&str>,
) -> AuthResult {
    let key = match public_key_hex {
        Some(hex_key) => match Ed25519PublicKey::from_hex(hex_key) {
            Ok(key) => key,
            Err(e) => return reject(RejectReason::PublicKey(e)),
        },
        None => return reject(RejectReason::MissingPublicKey),
    };

    verify_with_key(raw_body, signature_hex, timestamp, Some(&key))
}

/// Verify a request against an already parsed public key.
pub fn verify_with_key(
    raw_body: &[u8],
    signature_hex: Option<&str>,
    timestamp: Option<&str>,
    public_key: Option<&Ed25519PublicKey>,
) -> AuthResult {
    match check(raw_body, signature_hex, timestamp, public_key) {
        Ok(()) => AuthResult::Authenticated,
        Err(reason) => reject(reason),
    }
}

fn check(
    raw_body: &[u8],
    signature_hex: Option<&str>,
    timestamp: Option<&str>,
    public_key: Option<&Ed25519PublicKey>,
) -> Result<(), RejectReason> {
    let public_key = public_key.ok_or(RejectReason::MissingPublicKey)?;
    let signature_hex = signature_hex.ok_or(RejectReason::MissingSignature)?;
    let timestamp = timestamp.ok_or(RejectReason::MissingTimestamp)?;

    let signature = Ed25519Signature::from_hex(signature_hex).map_err(RejectReason::Signature)?;
    let message = signed_message(timestamp, raw_body);

    public_key
        .verify(&message, &signature)
        .map_err(RejectReason::Signature)
}

fn reject(reason: RejectReason) -> AuthResult {
    debug!(reason = %reason, "Request signature rejected");
    AuthResult::rejected()
}
