//! # Interactions Relay Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Signing keypair, signed requests, fake platform API
//! ├── exploits/         # Forged and tampered requests against the gate
//! └── integration/      # Signed request → reply, across every crate
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ix-tests
//!
//! # By category
//! cargo test -p ix-tests integration::
//! cargo test -p ix-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p ix-tests
//! ```

pub mod exploits;
pub mod fixtures;
