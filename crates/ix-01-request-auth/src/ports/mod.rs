//! # Ports Layer
//!
//! Trait definitions for the authentication subsystem.

pub mod inbound;
