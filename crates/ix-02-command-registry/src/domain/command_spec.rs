//! # Application Command Spec
//!
//! The per-command entry sent in a bulk overwrite.

use serde::{Deserialize, Serialize};

/// `CHAT_INPUT` (slash command).
pub const CHAT_INPUT_COMMAND_TYPE: u8 = 1;

/// Installable to users.
pub const USER_INSTALL_INTEGRATION: u8 = 1;

/// Usable inside guilds.
pub const GUILD_CONTEXT: u8 = 0;

/// One entry of the bulk overwrite body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationCommandSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub command_type: u8,
    pub description: String,
    pub integration_types: Vec<u8>,
    pub contexts: Vec<u8>,
}

impl ApplicationCommandSpec {
    pub fn chat_input(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command_type: CHAT_INPUT_COMMAND_TYPE,
            description: description.into(),
            integration_types: vec![USER_INSTALL_INTEGRATION],
            contexts: vec![GUILD_CONTEXT],
        }
    }
}
