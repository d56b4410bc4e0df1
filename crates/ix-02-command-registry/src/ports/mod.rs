//! Port definitions for the command registry.

pub mod inbound;
pub mod outbound;
