//! # Request Authentication Subsystem (IX-01)
//!
//! Verifies that an inbound webhook request was signed by the platform
//! before anything else looks at it.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure verification logic, no I/O
//! - **Ports Layer** (`ports/`): Trait the HTTP boundary depends on
//! - **Service Layer** (`service.rs`): Holds the configured public key
//!
//! ## Security Notes
//!
//! - The signed message is `timestamp || raw_body`, byte for byte
//! - Every failure, including missing headers and bad key material, yields
//!   the same `401 Bad request signature`
//! - Never panics on attacker-controlled input

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::entities::{
    AuthResult, SignedRequest, REJECTION_MESSAGE, REJECTION_STATUS, SIGNATURE_HEADER,
    TIMESTAMP_HEADER,
};
pub use domain::verify::{signed_message, verify, verify_with_key};
pub use ports::inbound::RequestAuthenticationApi;
pub use service::RequestAuthenticator;
