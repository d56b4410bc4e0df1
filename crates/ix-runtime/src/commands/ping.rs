//! `ping`: liveness check answered with a fixed text reply.

use async_trait::async_trait;
use ix_02_command_registry::{CommandContext, CommandHandler, HandlerError};
use shared_types::{ContentReply, Interaction};

pub struct PingCommand;

#[async_trait]
impl CommandHandler for PingCommand {
    type Output = ContentReply;

    fn identifier(&self) -> &str {
        "ping"
    }

    fn description(&self) -> Option<&str> {
        Some("Ping Pong")
    }

    async fn handle(
        &self,
        _interaction: Interaction,
        _context: CommandContext,
    ) -> Result<ContentReply, HandlerError> {
        Ok(ContentReply::new("Pong!"))
    }
}
