//! # Shared Types Crate
//!
//! Wire types exchanged with the platform, shared by every crate in the
//! workspace.
//!
//! ## Contents
//!
//! - `interaction`: the inbound webhook payload (`Interaction`) and its
//!   numeric type discriminator.
//! - `reply`: the closed set of handler reply kinds (`ContentReply`,
//!   `EmbedReply`).
//! - `response`: the envelope returned to the platform and the per-command
//!   reply template.
//! - `errors`: payload shape errors.

pub mod errors;
pub mod interaction;
pub mod reply;
pub mod response;

pub use errors::PayloadError;
pub use interaction::{GuildMember, Interaction, InteractionData, InteractionType, User};
pub use reply::{
    AuthorEmbed, ContentReply, EmbedReply, FieldEmbed, FooterEmbed, Reply, ReplyKind,
    ThumbnailEmbed,
};
pub use response::{
    InteractionResponse, InteractionResponseType, ReplyTemplate, ResponseData, EPHEMERAL_FLAG,
};
