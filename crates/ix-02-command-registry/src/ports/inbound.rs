//! # Inbound Ports (Driving Ports / API)
//!
//! What the HTTP boundary calls into.

use crate::domain::errors::DispatchError;
use shared_types::{Interaction, InteractionResponse};

/// Command dispatch API.
#[async_trait::async_trait]
pub trait CommandDispatchApi: Send + Sync {
    /// Dispatch an APPLICATION_COMMAND interaction to its handler and shape
    /// the handler's reply into the envelope.
    ///
    /// # Errors
    /// * `DispatchError::MalformedPayload` - no `data.name`
    /// * `DispatchError::CommandNotFound` - nothing registered under that name
    /// * `DispatchError::Handler` - the handler failed
    /// * `DispatchError::UnsupportedReturnType` - reply kind differs from the declared one
    async fn dispatch(&self, interaction: Interaction)
        -> Result<InteractionResponse, DispatchError>;

    /// Number of registered commands (including shadowed duplicates).
    fn command_count(&self) -> usize;
}
