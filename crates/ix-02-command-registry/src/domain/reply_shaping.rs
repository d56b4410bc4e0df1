//! # Reply Shaping
//!
//! Merges a handler's reply into a fresh envelope built from the command's
//! template.

use crate::domain::errors::DispatchError;
use shared_types::{InteractionResponse, Reply, ReplyKind, ReplyTemplate, ResponseData};

/// Build the envelope for `reply`.
///
/// `Content` fills `data.content`; `Embed` fills `data.embeds` with a
/// one-element list. A reply whose kind differs from `declared` is refused.
pub fn shape_reply(
    template: &ReplyTemplate,
    declared: ReplyKind,
    reply: Reply,
) -> Result<InteractionResponse, DispatchError> {
    let returned = reply.kind();
    if returned != declared {
        return Err(DispatchError::UnsupportedReturnType { declared, returned });
    }

    let mut envelope = template.instantiate();
    let data = envelope.data.get_or_insert_with(|| ResponseData {
        flags: template.flags,
        ..ResponseData::default()
    });

    match reply {
        Reply::Content(content) => data.content = Some(content.content),
        Reply::Embed(embed) => data.embeds = Some(vec![embed]),
    }

    Ok(envelope)
}
