//! Built-in commands.

mod info;
mod ping;
mod register;

pub use info::{build_info_embed, InfoCommand, INFO_COLOR};
pub use ping::PingCommand;
pub use register::{RegisterCommand, REGISTERED_MESSAGE};

use ix_02_command_registry::{CommandRegistry, PlatformApi, RegistrationError, RegistryBuilder};
use std::sync::Arc;

/// Registry holding `ping`, `register` and `info`, in that order.
pub fn builtin_registry(
    api: Arc<dyn PlatformApi>,
    application_id: Option<String>,
) -> Result<CommandRegistry, RegistrationError> {
    let mut builder = RegistryBuilder::strict();
    builder.register(None, PingCommand)?;
    builder.register(None, RegisterCommand::new(api, application_id))?;
    builder.register(None, InfoCommand)?;
    Ok(builder.freeze())
}
