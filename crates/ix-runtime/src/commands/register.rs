//! `register`: pushes the whole registry to the platform in one bulk call.

use async_trait::async_trait;
use ix_02_command_registry::{
    sync_registered_commands, CommandContext, CommandHandler, HandlerError, PlatformApi,
};
use shared_types::{ContentReply, Interaction};
use std::sync::Arc;

pub const REGISTERED_MESSAGE: &str = "Commands have been bulk registered!";

pub struct RegisterCommand {
    api: Arc<dyn PlatformApi>,
    application_id: Option<String>,
}

impl RegisterCommand {
    pub fn new(api: Arc<dyn PlatformApi>, application_id: Option<String>) -> Self {
        Self {
            api,
            application_id,
        }
    }
}

#[async_trait]
impl CommandHandler for RegisterCommand {
    type Output = ContentReply;

    fn identifier(&self) -> &str {
        "register"
    }

    fn description(&self) -> Option<&str> {
        Some("Bulk registers all commands")
    }

    async fn handle(
        &self,
        _interaction: Interaction,
        context: CommandContext,
    ) -> Result<ContentReply, HandlerError> {
        sync_registered_commands(
            context.registry(),
            self.api.as_ref(),
            self.application_id.as_deref(),
        )
        .await?;
        Ok(ContentReply::new(REGISTERED_MESSAGE))
    }
}
