//! Interactions gateway service - HTTP server lifecycle.

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::middleware::GatewayMetrics;
use crate::router::build_router;
use axum::Router;
use ix_01_request_auth::RequestAuthenticationApi;
use ix_02_command_registry::CommandDispatchApi;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tracing::info;

/// Interactions gateway service state
pub struct InteractionsGatewayService {
    config: GatewayConfig,
    authenticator: Arc<dyn RequestAuthenticationApi>,
    dispatcher: Arc<dyn CommandDispatchApi>,
    metrics: Arc<GatewayMetrics>,
    shutdown: Arc<Notify>,
}

impl InteractionsGatewayService {
    /// Create a new gateway service
    pub fn new(
        config: GatewayConfig,
        authenticator: Arc<dyn RequestAuthenticationApi>,
        dispatcher: Arc<dyn CommandDispatchApi>,
    ) -> Result<Self, GatewayError> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        Ok(Self {
            config,
            authenticator,
            dispatcher,
            metrics: Arc::new(GatewayMetrics::new()),
            shutdown: Arc::new(Notify::new()),
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Get metrics
    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Router with the full middleware stack
    pub fn router(&self) -> Router {
        build_router(
            &self.config.interactions_path,
            Arc::clone(&self.authenticator),
            Arc::clone(&self.dispatcher),
            Arc::clone(&self.metrics),
            self.config.max_body_bytes,
        )
    }

    /// Bind the configured address
    pub async fn bind(&self) -> Result<TcpListener, GatewayError> {
        let addr = self.config.http_addr();
        TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(format!("{addr}: {e}")))
    }

    /// Bind and serve until [`shutdown`](Self::shutdown) is called
    pub async fn start(&self) -> Result<(), GatewayError> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until shutdown.
    ///
    /// In-flight requests are allowed to finish.
    pub async fn serve(&self, listener: TcpListener) -> Result<(), GatewayError> {
        let local_addr = listener
            .local_addr()
            .map_err(|e| GatewayError::Bind(e.to_string()))?;
        info!(
            addr = %local_addr,
            path = %self.config.interactions_path,
            commands = self.dispatcher.command_count(),
            "Interactions gateway listening"
        );

        let shutdown = Arc::clone(&self.shutdown);
        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move { shutdown.notified().await })
            .await
            .map_err(|e| GatewayError::Serve(e.to_string()))?;

        info!("Interactions gateway stopped");
        Ok(())
    }

    /// Trigger graceful shutdown.
    ///
    /// Safe to call before the server has started; it will then stop as soon
    /// as it starts.
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }
}
