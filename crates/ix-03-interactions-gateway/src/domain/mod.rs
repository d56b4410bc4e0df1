//! Domain layer for the interactions gateway.

pub mod config;
pub mod error;
