//! # Command Dispatch Service
//!
//! Looks up the handler for an APPLICATION_COMMAND interaction, awaits it
//! and shapes its reply. Also hosts the bulk command sync.

use crate::domain::errors::{DispatchError, SyncError};
use crate::domain::handler::CommandContext;
use crate::domain::registry::{CommandRegistry, Lookup};
use crate::domain::reply_shaping::shape_reply;
use crate::ports::inbound::CommandDispatchApi;
use crate::ports::outbound::{HttpMethod, PlatformApi, PlatformResponse};
use async_trait::async_trait;
use shared_types::{Interaction, InteractionResponse};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Dispatcher over a frozen registry.
#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    registry: Arc<CommandRegistry>,
}

impl CommandDispatcher {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }
}

#[async_trait]
impl CommandDispatchApi for CommandDispatcher {
    async fn dispatch(
        &self,
        interaction: Interaction,
    ) -> Result<InteractionResponse, DispatchError> {
        let name = interaction.command_name()?.to_string();

        let descriptor = match self.registry.lookup(&name) {
            Lookup::Found(descriptor) => descriptor,
            Lookup::NotFound => {
                warn!(command = %name, "Command not found");
                return Err(DispatchError::CommandNotFound(name));
            }
        };

        debug!(command = %name, kind = %descriptor.declared_kind(), "Dispatching command");

        let context = CommandContext::new(Arc::clone(&self.registry));
        let reply = descriptor
            .handler()
            .call(interaction, context)
            .await
            .map_err(|source| DispatchError::Handler {
                command: name.clone(),
                source,
            })?;

        shape_reply(
            &descriptor.reply_template(),
            descriptor.declared_kind(),
            reply,
        )
    }

    fn command_count(&self) -> usize {
        self.registry.len()
    }
}

/// `applications/{id}/commands`
pub fn bulk_overwrite_endpoint(application_id: &str) -> String {
    format!("/applications/{application_id}/commands")
}

/// Replace the platform's command list with every registered command.
///
/// The local registry is untouched whatever the outcome.
pub async fn sync_registered_commands(
    registry: &CommandRegistry,
    api: &dyn PlatformApi,
    application_id: Option<&str>,
) -> Result<PlatformResponse, SyncError> {
    let application_id = application_id
        .filter(|id| !id.is_empty())
        .ok_or(SyncError::MissingApplicationId)?;

    let body = serde_json::to_value(registry.command_specs())
        .map_err(|e| SyncError::Encode(e.to_string()))?;

    let response = api
        .send(
            HttpMethod::Put,
            &bulk_overwrite_endpoint(application_id),
            Some(&body),
        )
        .await?;

    info!(
        commands = registry.len(),
        status = response.status,
        "Bulk registered commands"
    );
    Ok(response)
}
