//! # Command Handlers
//!
//! A handler is an async function from an interaction to one of the two
//! reply kinds. The reply kind is fixed by the handler's associated
//! `Output` type, so the registry knows at registration time how every
//! command's result will be embedded in the envelope.

use crate::domain::errors::HandlerError;
use crate::domain::registry::CommandRegistry;
use async_trait::async_trait;
use shared_types::{ContentReply, EmbedReply, Interaction, Reply, ReplyKind};
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

/// Values a handler may return.
///
/// Implemented only for [`ContentReply`] and [`EmbedReply`].
pub trait IntoReply: Send + 'static {
    /// Reply kind declared by handlers returning this type.
    const KIND: ReplyKind;

    fn into_reply(self) -> Reply;
}

impl IntoReply for ContentReply {
    const KIND: ReplyKind = ReplyKind::Content;

    fn into_reply(self) -> Reply {
        Reply::Content(self)
    }
}

impl IntoReply for EmbedReply {
    const KIND: ReplyKind = ReplyKind::Embed;

    fn into_reply(self) -> Reply {
        Reply::Embed(self)
    }
}

/// Per-invocation context handed to handlers.
#[derive(Clone, Debug)]
pub struct CommandContext {
    registry: Arc<CommandRegistry>,
}

impl CommandContext {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    /// The frozen registry the command was dispatched from.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}

/// Typed command handler.
#[async_trait]
pub trait CommandHandler: Send + Sync + 'static {
    /// Reply kind produced by this handler.
    type Output: IntoReply;

    /// Default command name when none is given at registration.
    fn identifier(&self) -> &str;

    /// Description sent to the platform during bulk sync.
    fn description(&self) -> Option<&str> {
        None
    }

    async fn handle(
        &self,
        interaction: Interaction,
        context: CommandContext,
    ) -> Result<Self::Output, HandlerError>;
}

/// Object-safe handler with the output type erased.
///
/// Every [`CommandHandler`] is one. Implementing it directly is possible,
/// in which case the dispatcher checks at call time that the produced reply
/// matches `declared_kind`.
#[async_trait]
pub trait DynCommandHandler: Send + Sync {
    fn handler_identifier(&self) -> &str;

    fn handler_description(&self) -> Option<&str>;

    fn declared_kind(&self) -> ReplyKind;

    async fn call(
        &self,
        interaction: Interaction,
        context: CommandContext,
    ) -> Result<Reply, HandlerError>;
}

#[async_trait]
impl<H: CommandHandler> DynCommandHandler for H {
    fn handler_identifier(&self) -> &str {
        self.identifier()
    }

    fn handler_description(&self) -> Option<&str> {
        self.description()
    }

    fn declared_kind(&self) -> ReplyKind {
        <H::Output as IntoReply>::KIND
    }

    async fn call(
        &self,
        interaction: Interaction,
        context: CommandContext,
    ) -> Result<Reply, HandlerError> {
        self.handle(interaction, context)
            .await
            .map(IntoReply::into_reply)
    }
}

/// Handler backed by an async closure. Built with [`command_fn`].
pub struct FnCommand<F, Fut, O> {
    identifier: String,
    description: Option<String>,
    func: F,
    _marker: PhantomData<fn() -> (Fut, O)>,
}

/// Wrap an async closure as a command handler.
///
/// ```ignore
/// let ping = command_fn("ping", |_interaction, _ctx| async {
///     Ok(ContentReply::new("Pong!"))
/// })
/// .with_description("Ping Pong");
/// ```
pub fn command_fn<F, Fut, O>(identifier: impl Into<String>, func: F) -> FnCommand<F, Fut, O>
where
    F: Fn(Interaction, CommandContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<O, HandlerError>> + Send + 'static,
    O: IntoReply,
{
    FnCommand {
        identifier: identifier.into(),
        description: None,
        func,
        _marker: PhantomData,
    }
}

impl<F, Fut, O> FnCommand<F, Fut, O> {
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[async_trait]
impl<F, Fut, O> CommandHandler for FnCommand<F, Fut, O>
where
    F: Fn(Interaction, CommandContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<O, HandlerError>> + Send + 'static,
    O: IntoReply,
{
    type Output = O;

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    async fn handle(
        &self,
        interaction: Interaction,
        context: CommandContext,
    ) -> Result<O, HandlerError> {
        (self.func)(interaction, context).await
    }
}
