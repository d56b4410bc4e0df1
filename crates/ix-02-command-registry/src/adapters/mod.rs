//! Adapters for the command registry's outbound ports.

pub mod discord_rest;
