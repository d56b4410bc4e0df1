//! # Reply Envelope
//!
//! What the webhook returns to the platform: `{type, data?}`.

use crate::reply::EmbedReply;
use serde::{Deserialize, Serialize};

/// Message flag marking a reply as visible only to the invoking user.
pub const EPHEMERAL_FLAG: u64 = 64;

/// Numeric response type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum InteractionResponseType {
    /// Handshake acknowledgement.
    Pong,
    /// Respond with a message.
    ChannelMessageWithSource,
    /// Any other value.
    Other(u8),
}

impl From<u8> for InteractionResponseType {
    fn from(value: u8) -> Self {
        match value {
            1 => InteractionResponseType::Pong,
            4 => InteractionResponseType::ChannelMessageWithSource,
            other => InteractionResponseType::Other(other),
        }
    }
}

impl From<InteractionResponseType> for u8 {
    fn from(value: InteractionResponseType) -> Self {
        match value {
            InteractionResponseType::Pong => 1,
            InteractionResponseType::ChannelMessageWithSource => 4,
            InteractionResponseType::Other(other) => other,
        }
    }
}

/// Reply envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: InteractionResponseType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

impl InteractionResponse {
    /// `{"type": 1}`
    pub fn pong() -> Self {
        Self {
            kind: InteractionResponseType::Pong,
            data: None,
        }
    }
}

/// `data` section of a message reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseData {
    pub flags: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<EmbedReply>>,
}

/// Fixed envelope skeleton attached to a command at registration.
///
/// Immutable once registered; every dispatch builds a fresh envelope from
/// it with [`ReplyTemplate::instantiate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTemplate {
    pub kind: InteractionResponseType,
    pub flags: u64,
}

impl Default for ReplyTemplate {
    fn default() -> Self {
        Self {
            kind: InteractionResponseType::ChannelMessageWithSource,
            flags: EPHEMERAL_FLAG,
        }
    }
}

impl ReplyTemplate {
    /// New envelope owned by the caller, with an empty data section.
    pub fn instantiate(&self) -> InteractionResponse {
        InteractionResponse {
            kind: self.kind,
            data: Some(ResponseData {
                flags: self.flags,
                content: None,
                embeds: None,
            }),
        }
    }
}
