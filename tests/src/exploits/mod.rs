//! # Signature Gate Attacks
//!
//! Forged, replayed and tampered requests. Each one must be refused before
//! any command runs, with the same uniform rejection.

pub mod oversized_bodies;
pub mod tampering;
