//! `info`: embed describing the member who invoked the command.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ix_02_command_registry::{CommandContext, CommandHandler, HandlerError};
use shared_types::{EmbedReply, FooterEmbed, GuildMember, Interaction, ThumbnailEmbed};
use tracing::debug;

/// Embed colour (red).
pub const INFO_COLOR: u32 = 0xff0000;

const AVATAR_CDN: &str = "https://cdn.discordapp.com/avatars";
const JOINED_FORMAT: &str = "%B %d, %Y %I:%M:%S %p";

pub struct InfoCommand;

#[async_trait]
impl CommandHandler for InfoCommand {
    type Output = EmbedReply;

    fn identifier(&self) -> &str {
        "info"
    }

    async fn handle(
        &self,
        interaction: Interaction,
        _context: CommandContext,
    ) -> Result<EmbedReply, HandlerError> {
        let member = interaction.member.as_ref().ok_or_else(|| {
            HandlerError::InvalidInteraction("interaction has no member".to_string())
        })?;
        build_info_embed(member, Utc::now())
    }
}

/// Build the member embed.
///
/// Title is `global_name - username` (display name falls back to the
/// username), description lists the roles as mentions, the footer carries
/// the join date and the thumbnail the avatar. Missing or unparsable parts
/// are left out.
pub fn build_info_embed(
    member: &GuildMember,
    now: DateTime<Utc>,
) -> Result<EmbedReply, HandlerError> {
    let user = member.user.as_ref().ok_or_else(|| {
        HandlerError::InvalidInteraction("member has no user".to_string())
    })?;

    let display_name = user.global_name.as_deref().unwrap_or(&user.username);
    let mut embed = EmbedReply::new()
        .title(format!("{} - {}", display_name, user.username))
        .timestamp(now)
        .color(INFO_COLOR);

    if !member.roles.is_empty() {
        let mentions: Vec<String> = member.roles.iter().map(|r| format!("<@&{r}>")).collect();
        embed = embed.description(mentions.join(", "));
    }

    if let Some(joined_at) = member.joined_at.as_deref() {
        match DateTime::parse_from_rfc3339(joined_at) {
            Ok(joined) => {
                embed = embed.footer(FooterEmbed::new(format!(
                    "Joined: {}",
                    joined.format(JOINED_FORMAT)
                )));
            }
            Err(e) => debug!(joined_at, error = %e, "Unparsable join date"),
        }
    }

    if let Some(avatar) = user.avatar.as_deref() {
        embed = embed.thumbnail(ThumbnailEmbed::new(format!(
            "{AVATAR_CDN}/{}/{avatar}",
            user.id
        )));
    }

    Ok(embed)
}
