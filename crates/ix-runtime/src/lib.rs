//! # Interactions Relay Runtime
//!
//! Wires the subsystems into one process.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment ([`load_config`])
//! 2. Parse the application public key into the authenticator
//! 3. Build the REST client and the built-in command registry
//! 4. Optionally push the command list to the platform
//! 5. Serve the signed endpoint until shutdown
//!
//! A missing or malformed public key does not stop startup; every signed
//! request is then rejected with 401.

pub mod commands;
pub mod config;

pub use commands::builtin_registry;
pub use config::{load_config, load_config_from, RelayConfig};

use anyhow::{Context, Result};
use ix_01_request_auth::RequestAuthenticator;
use ix_02_command_registry::{
    sync_registered_commands, CommandDispatcher, CommandRegistry, DiscordRestClient, PlatformApi,
    PlatformResponse, SyncError,
};
use ix_03_interactions_gateway::InteractionsGatewayService;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// The relay process: registry, outbound client and HTTP gateway.
pub struct RelayRuntime {
    application_id: Option<String>,
    sync_on_startup: bool,
    registry: Arc<CommandRegistry>,
    api: Arc<dyn PlatformApi>,
    gateway: InteractionsGatewayService,
}

impl RelayRuntime {
    /// Build the runtime against the real platform REST API.
    pub fn new(config: RelayConfig) -> Result<Self> {
        let client = DiscordRestClient::new(config.rest.clone())
            .context("Failed to build platform REST client")?;
        Self::with_platform(config, Arc::new(client))
    }

    /// Build the runtime against any [`PlatformApi`].
    pub fn with_platform(config: RelayConfig, api: Arc<dyn PlatformApi>) -> Result<Self> {
        info!("Creating interactions relay runtime");

        let authenticator = RequestAuthenticator::from_config(config.public_key.as_deref());
        if !authenticator.has_key() {
            warn!("No usable APP_PUBKEY; every interaction will be rejected");
        }

        let registry = Arc::new(
            builtin_registry(Arc::clone(&api), config.application_id.clone())
                .context("Failed to register built-in commands")?,
        );

        let gateway = InteractionsGatewayService::new(
            config.gateway,
            Arc::new(authenticator),
            Arc::new(CommandDispatcher::new(Arc::clone(&registry))),
        )
        .context("Invalid gateway configuration")?;

        Ok(Self {
            application_id: config.application_id,
            sync_on_startup: config.sync_on_startup,
            registry,
            api,
            gateway,
        })
    }

    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    pub fn gateway(&self) -> &InteractionsGatewayService {
        &self.gateway
    }

    /// Push every registered command to the platform.
    pub async fn sync_commands(&self) -> Result<PlatformResponse, SyncError> {
        sync_registered_commands(
            &self.registry,
            self.api.as_ref(),
            self.application_id.as_deref(),
        )
        .await
    }

    /// Bind the configured address and serve until [`shutdown`](Self::shutdown).
    pub async fn start(&self) -> Result<()> {
        let listener = self.gateway.bind().await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until shutdown.
    ///
    /// A failed startup sync is logged; the endpoint is served regardless.
    pub async fn serve(&self, listener: TcpListener) -> Result<()> {
        let names: Vec<&str> = self.registry.names().collect();
        info!(commands = ?names, "Interactions relay starting");

        if self.sync_on_startup {
            match self.sync_commands().await {
                Ok(response) => info!(status = response.status, "Startup command sync done"),
                Err(e) => warn!(error = %e, "Startup command sync failed"),
            }
        }

        self.gateway.serve(listener).await?;
        Ok(())
    }

    /// Stop accepting requests; in-flight ones complete.
    pub fn shutdown(&self) {
        info!("Initiating graceful shutdown...");
        self.gateway.shutdown();
    }
}
