//! # Command Registry Subsystem (IX-02)
//!
//! Maps an authenticated APPLICATION_COMMAND interaction to the handler
//! registered under its name and shapes the handler's typed reply into the
//! reply envelope. Also pushes the registered command list to the platform
//! (bulk sync).
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): handlers, registry, reply shaping
//! - **Ports Layer** (`ports/`): dispatch API and platform REST SPI
//! - **Adapters Layer** (`adapters/`): reqwest-based REST client
//! - **Service Layer** (`service.rs`): dispatcher and bulk sync
//!
//! ## Lifecycle
//!
//! ```text
//! RegistryBuilder::new() -> register(..)* -> freeze() -> Arc<CommandRegistry>
//! ```
//!
//! The frozen registry has no write path, so concurrent dispatches read it
//! without locks. Each dispatch builds its own envelope from the command's
//! template.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::discord_rest::{
    DiscordRestClient, RestClientConfig, DEFAULT_TIMEOUT, DISCORD_API_BASE_URL,
};
pub use domain::command_spec::ApplicationCommandSpec;
pub use domain::errors::{DispatchError, HandlerError, RegistrationError, SyncError};
pub use domain::handler::{
    command_fn, CommandContext, CommandHandler, DynCommandHandler, FnCommand, IntoReply,
};
pub use domain::registry::{
    CommandDescriptor, CommandHandle, CommandRegistry, Lookup, RegistryBuilder,
    DEFAULT_DESCRIPTION,
};
pub use domain::reply_shaping::shape_reply;
pub use ports::inbound::CommandDispatchApi;
pub use ports::outbound::{HttpMethod, PlatformApi, PlatformError, PlatformResponse};
pub use service::{bulk_overwrite_endpoint, sync_registered_commands, CommandDispatcher};
