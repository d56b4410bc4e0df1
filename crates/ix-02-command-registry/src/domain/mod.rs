//! Domain layer for the command registry.

pub mod command_spec;
pub mod errors;
pub mod handler;
pub mod registry;
pub mod reply_shaping;
