//! # Interaction Payload
//!
//! The JSON document the platform POSTs to the webhook endpoint.
//!
//! Only the fields the relay reads are typed; everything else is kept in the
//! `extra` maps so handlers can still reach it.

use crate::errors::PayloadError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Numeric interaction type carried in the payload's `type` field.
///
/// Unknown numbers deserialize into `Unknown` rather than failing, so the
/// gateway can answer "not implemented" instead of "bad request".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum InteractionType {
    /// Endpoint handshake.
    Ping,
    /// Slash command invocation.
    ApplicationCommand,
    /// Button / select menu.
    MessageComponent,
    /// Option autocomplete request.
    ApplicationCommandAutocomplete,
    /// Modal form submission.
    ModalSubmit,
    /// Any other value.
    Unknown(i64),
}

impl From<i64> for InteractionType {
    fn from(value: i64) -> Self {
        match value {
            1 => InteractionType::Ping,
            2 => InteractionType::ApplicationCommand,
            3 => InteractionType::MessageComponent,
            4 => InteractionType::ApplicationCommandAutocomplete,
            5 => InteractionType::ModalSubmit,
            other => InteractionType::Unknown(other),
        }
    }
}

impl From<InteractionType> for i64 {
    fn from(value: InteractionType) -> Self {
        match value {
            InteractionType::Ping => 1,
            InteractionType::ApplicationCommand => 2,
            InteractionType::MessageComponent => 3,
            InteractionType::ApplicationCommandAutocomplete => 4,
            InteractionType::ModalSubmit => 5,
            InteractionType::Unknown(other) => other,
        }
    }
}

impl std::fmt::Display for InteractionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InteractionType::Ping => write!(f, "PING"),
            InteractionType::ApplicationCommand => write!(f, "APPLICATION_COMMAND"),
            InteractionType::MessageComponent => write!(f, "MESSAGE_COMPONENT"),
            InteractionType::ApplicationCommandAutocomplete => {
                write!(f, "APPLICATION_COMMAND_AUTOCOMPLETE")
            }
            InteractionType::ModalSubmit => write!(f, "MODAL_SUBMIT"),
            InteractionType::Unknown(n) => write!(f, "UNKNOWN({})", n),
        }
    }
}

/// Inbound interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// Interaction type discriminator.
    #[serde(rename = "type")]
    pub kind: InteractionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<String>,
    /// Command data (present for command interactions).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionData>,
    /// Invoking guild member (absent in DMs).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<GuildMember>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Interaction {
    /// Parse an interaction from raw body bytes.
    pub fn from_slice(body: &[u8]) -> Result<Self, PayloadError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Build a bare interaction of the given type.
    pub fn new(kind: InteractionType) -> Self {
        Self {
            kind,
            id: None,
            application_id: None,
            token: None,
            guild_id: None,
            data: None,
            member: None,
            extra: Map::new(),
        }
    }

    /// Build an application-command interaction invoking `name`.
    pub fn command(name: impl Into<String>) -> Self {
        let mut interaction = Self::new(InteractionType::ApplicationCommand);
        interaction.data = Some(InteractionData {
            name: Some(name.into()),
            ..InteractionData::default()
        });
        interaction
    }

    /// The invoked command name (`data.name`).
    pub fn command_name(&self) -> Result<&str, PayloadError> {
        let data = self.data.as_ref().ok_or(PayloadError::MissingData)?;
        data.name
            .as_deref()
            .ok_or(PayloadError::MissingCommandName)
    }
}

/// `data` object of a command interaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Application command type (1 = chat input).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub command_type: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Guild member who triggered the interaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuildMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default)]
    pub roles: Vec<String>,
    /// ISO 8601 join timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Platform user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,
    /// Avatar hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
