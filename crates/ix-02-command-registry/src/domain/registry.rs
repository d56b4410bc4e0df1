//! # Command Registry
//!
//! Commands are registered on a [`RegistryBuilder`] during startup, then the
//! builder is frozen into a [`CommandRegistry`] that has no write path and is
//! shared behind an `Arc`.
//!
//! Names are case-sensitive. Registering a name twice is allowed unless the
//! builder is strict; lookups always resolve to the first registration.

use crate::domain::command_spec::ApplicationCommandSpec;
use crate::domain::errors::RegistrationError;
use crate::domain::handler::{CommandHandler, DynCommandHandler};
use shared_types::{ReplyKind, ReplyTemplate};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Description used when a handler provides none.
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// One registration. Never mutated after creation.
#[derive(Clone)]
pub struct CommandDescriptor {
    name: String,
    description: String,
    declared_kind: ReplyKind,
    reply_template: ReplyTemplate,
    handler: Arc<dyn DynCommandHandler>,
}

impl CommandDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn declared_kind(&self) -> ReplyKind {
        self.declared_kind
    }

    pub fn reply_template(&self) -> ReplyTemplate {
        self.reply_template
    }

    pub fn handler(&self) -> &Arc<dyn DynCommandHandler> {
        &self.handler
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("declared_kind", &self.declared_kind)
            .field("reply_template", &self.reply_template)
            .finish_non_exhaustive()
    }
}

/// Receipt for a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandHandle {
    index: usize,
    name: String,
    shadowed: bool,
}

impl CommandHandle {
    /// Position in registration order.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when an earlier registration already owns this name, so this
    /// one will never be reached by lookup.
    pub fn is_shadowed(&self) -> bool {
        self.shadowed
    }
}

/// Mutable registry used during startup.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    descriptors: Vec<CommandDescriptor>,
    strict: bool,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder that rejects duplicate names with
    /// [`RegistrationError::DuplicateName`].
    pub fn strict() -> Self {
        Self {
            descriptors: Vec::new(),
            strict: true,
        }
    }

    /// Register a typed handler under `name`, or under
    /// `handler.identifier()` when `name` is `None`.
    pub fn register<H: CommandHandler>(
        &mut self,
        name: Option<&str>,
        handler: H,
    ) -> Result<CommandHandle, RegistrationError> {
        self.register_dyn(name, Arc::new(handler))
    }

    /// Register a type-erased handler.
    pub fn register_dyn(
        &mut self,
        name: Option<&str>,
        handler: Arc<dyn DynCommandHandler>,
    ) -> Result<CommandHandle, RegistrationError> {
        let name = name
            .unwrap_or_else(|| handler.handler_identifier())
            .to_string();
        if name.is_empty() {
            return Err(RegistrationError::EmptyName);
        }

        let shadowed = self.contains(&name);
        if shadowed {
            if self.strict {
                return Err(RegistrationError::DuplicateName(name));
            }
            warn!(
                command = %name,
                "Command registered twice; the earlier registration wins"
            );
        }

        let descriptor = CommandDescriptor {
            name,
            description: handler
                .handler_description()
                .unwrap_or(DEFAULT_DESCRIPTION)
                .to_string(),
            declared_kind: handler.declared_kind(),
            reply_template: ReplyTemplate::default(),
            handler,
        };

        let handle = CommandHandle {
            index: self.descriptors.len(),
            name: descriptor.name.clone(),
            shadowed,
        };

        debug!(
            command = %descriptor.name,
            kind = %descriptor.declared_kind,
            "Registered command"
        );
        self.descriptors.push(descriptor);
        Ok(handle)
    }

    fn contains(&self, name: &str) -> bool {
        self.descriptors.iter().any(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// End the registration phase.
    pub fn freeze(self) -> CommandRegistry {
        CommandRegistry {
            descriptors: self.descriptors,
        }
    }
}

/// Result of a registry lookup.
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'a> {
    Found(&'a CommandDescriptor),
    NotFound,
}

/// Frozen, read-only registry.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    descriptors: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// First descriptor whose name equals `name` exactly.
    pub fn lookup(&self, name: &str) -> Lookup<'_> {
        match self.descriptors.iter().find(|d| d.name == name) {
            Some(descriptor) => Lookup::Found(descriptor),
            None => Lookup::NotFound,
        }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Names in registration order, duplicates included.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(|d| d.name.as_str())
    }

    pub fn descriptors(&self) -> &[CommandDescriptor] {
        &self.descriptors
    }

    /// Bulk sync payload, one entry per registration in order.
    pub fn command_specs(&self) -> Vec<ApplicationCommandSpec> {
        self.descriptors
            .iter()
            .map(|d| ApplicationCommandSpec::chat_input(&d.name, &d.description))
            .collect()
    }
}
