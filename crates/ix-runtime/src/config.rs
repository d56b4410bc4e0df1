//! Runtime configuration loaded from the environment.
//!
//! Defaults first, then environment overrides. Values that fail to parse are
//! logged and the default is kept.

use ix_02_command_registry::{RestClientConfig, DISCORD_API_BASE_URL};
use ix_03_interactions_gateway::GatewayConfig;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Everything the runtime needs to start.
#[derive(Clone, Default)]
pub struct RelayConfig {
    /// HTTP boundary settings
    pub gateway: GatewayConfig,
    /// Hex Ed25519 public key of the application (`APP_PUBKEY`)
    pub public_key: Option<String>,
    /// Outbound REST client settings, including the bot token (`APP_TOKEN`)
    pub rest: RestClientConfig,
    /// Application id used for bulk sync (`APP_ID`)
    pub application_id: Option<String>,
    /// Push the command list once at startup
    pub sync_on_startup: bool,
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("gateway", &self.gateway)
            .field("public_key", &self.public_key)
            .field("rest", &self.rest)
            .field("application_id", &self.application_id)
            .field("sync_on_startup", &self.sync_on_startup)
            .finish()
    }
}

/// Load configuration from the process environment.
pub fn load_config() -> RelayConfig {
    load_config_from(|key| env::var(key).ok())
}

/// Load configuration from an arbitrary variable source.
pub fn load_config_from<F>(lookup: F) -> RelayConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = RelayConfig::default();
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    config.public_key = non_empty("APP_PUBKEY");
    config.rest.token = non_empty("APP_TOKEN");
    config.application_id = non_empty("APP_ID").or_else(|| non_empty("app_id"));

    if let Some(host) = non_empty("IX_HTTP_HOST") {
        override_parsed(&mut config.gateway.http.host, "IX_HTTP_HOST", &host);
    }
    if let Some(port) = non_empty("IX_HTTP_PORT") {
        override_parsed(&mut config.gateway.http.port, "IX_HTTP_PORT", &port);
    }
    if let Some(path) = non_empty("IX_INTERACTIONS_PATH") {
        config.gateway.interactions_path = path;
    }
    if let Some(limit) = non_empty("IX_MAX_BODY_BYTES") {
        override_parsed(&mut config.gateway.max_body_bytes, "IX_MAX_BODY_BYTES", &limit);
    }

    config.rest.base_url =
        non_empty("IX_API_BASE_URL").unwrap_or_else(|| DISCORD_API_BASE_URL.to_string());
    if let Some(secs) = non_empty("IX_API_TIMEOUT_SECS") {
        let mut timeout = config.rest.timeout.as_secs();
        override_parsed(&mut timeout, "IX_API_TIMEOUT_SECS", &secs);
        if timeout == 0 {
            warn!("IX_API_TIMEOUT_SECS must be positive; keeping default");
        } else {
            config.rest.timeout = Duration::from_secs(timeout);
        }
    }

    if let Some(flag) = non_empty("IX_SYNC_ON_STARTUP") {
        config.sync_on_startup = parse_flag(&flag);
    }

    if config.rest.token.is_none() {
        info!("APP_TOKEN not set; bulk command sync will fail");
    }
    if config.application_id.is_none() {
        info!("APP_ID not set; bulk command sync will fail");
    }

    config
}

fn override_parsed<T: FromStr>(slot: &mut T, key: &str, raw: &str) {
    match raw.trim().parse::<T>() {
        Ok(value) => *slot = value,
        Err(_) => warn!(key, value = raw, "Ignoring unparsable configuration value"),
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
