//! # Reply Kinds
//!
//! The closed set of values a command handler may return. The dispatcher
//! switches on [`ReplyKind`] to decide how a value is embedded in the
//! reply envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tag of a reply kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    /// Plain message content.
    Content,
    /// Single rich embed.
    Embed,
}

impl std::fmt::Display for ReplyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplyKind::Content => write!(f, "ContentReply"),
            ReplyKind::Embed => write!(f, "EmbedReply"),
        }
    }
}

/// Type-erased handler output.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Content(ContentReply),
    Embed(EmbedReply),
}

impl Reply {
    /// Kind tag of this value.
    pub fn kind(&self) -> ReplyKind {
        match self {
            Reply::Content(_) => ReplyKind::Content,
            Reply::Embed(_) => ReplyKind::Embed,
        }
    }
}

impl From<ContentReply> for Reply {
    fn from(reply: ContentReply) -> Self {
        Reply::Content(reply)
    }
}

impl From<EmbedReply> for Reply {
    fn from(reply: EmbedReply) -> Self {
        Reply::Embed(reply)
    }
}

/// Plain text reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentReply {
    pub content: String,
}

impl ContentReply {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Rich embed reply. `None` fields are omitted on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedReply {
    /// Embed type, always `"rich"` for bot-authored embeds.
    #[serde(rename = "type", default = "default_embed_type")]
    pub embed_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// RGB colour as an integer (`0xff0000` is red).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorEmbed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterEmbed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldEmbed>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<ThumbnailEmbed>,
}

fn default_embed_type() -> String {
    "rich".to_string()
}

impl Default for EmbedReply {
    fn default() -> Self {
        Self {
            embed_type: default_embed_type(),
            title: None,
            description: None,
            url: None,
            timestamp: None,
            color: None,
            author: None,
            footer: None,
            fields: None,
            thumbnail: None,
        }
    }
}

impl EmbedReply {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn author(mut self, author: AuthorEmbed) -> Self {
        self.author = Some(author);
        self
    }

    pub fn footer(mut self, footer: FooterEmbed) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn thumbnail(mut self, thumbnail: ThumbnailEmbed) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    /// Append a field, creating the list on first use.
    pub fn field(mut self, field: FieldEmbed) -> Self {
        self.fields.get_or_insert_with(Vec::new).push(field);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorEmbed {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterEmbed {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl FooterEmbed {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEmbed {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

impl FieldEmbed {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailEmbed {
    pub url: String,
}

impl ThumbnailEmbed {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
