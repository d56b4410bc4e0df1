//! # Discord REST Adapter
//!
//! [`PlatformApi`] over reqwest. Each request carries the bot token and a
//! JSON content type, and is bounded by the client timeout. Nothing is
//! retried.

use crate::ports::outbound::{HttpMethod, PlatformApi, PlatformError, PlatformResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Default REST base URL.
pub const DISCORD_API_BASE_URL: &str = "https://discord.com/api/v10";

/// Default outbound timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// REST client configuration.
#[derive(Clone)]
pub struct RestClientConfig {
    pub base_url: String,
    /// Bot token; requests fail with `PlatformError::Config` when absent.
    pub token: Option<String>,
    pub timeout: Duration,
}

impl Default for RestClientConfig {
    fn default() -> Self {
        Self {
            base_url: DISCORD_API_BASE_URL.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for RestClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Platform REST client.
pub struct DiscordRestClient {
    client: Client,
    base_url: String,
    authorization: Option<HeaderValue>,
}

impl DiscordRestClient {
    /// Build the client. Fails only if the TLS backend cannot initialise or
    /// the token contains bytes not allowed in a header.
    pub fn new(config: RestClientConfig) -> Result<Self, PlatformError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PlatformError::Config(e.to_string()))?;

        let authorization = match config.token {
            Some(token) => {
                let mut value = HeaderValue::from_str(&format!("Bot {token}"))
                    .map_err(|_| PlatformError::Config("invalid bot token".to_string()))?;
                value.set_sensitive(true);
                Some(value)
            }
            None => None,
        };

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            authorization,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }
}

impl fmt::Debug for DiscordRestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordRestClient")
            .field("base_url", &self.base_url)
            .field("authorized", &self.authorization.is_some())
            .finish()
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn map_transport_error(error: reqwest::Error) -> PlatformError {
    if error.is_timeout() {
        PlatformError::Timeout
    } else {
        PlatformError::Transport(error.to_string())
    }
}

#[async_trait]
impl PlatformApi for DiscordRestClient {
    async fn send(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<PlatformResponse, PlatformError> {
        let authorization = self
            .authorization
            .clone()
            .ok_or_else(|| PlatformError::Config("bot token is not configured".to_string()))?;

        let url = self.url(endpoint);
        debug!(%method, %url, "Sending platform request");

        let mut request = self
            .client
            .request(to_reqwest_method(method), &url)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(map_transport_error)?;

        if !(200..300).contains(&status) {
            warn!(%method, %url, status, "Platform request failed");
            return Err(PlatformError::Status { status, body: text });
        }

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| PlatformError::Decode(e.to_string()))?
        };

        Ok(PlatformResponse { status, body })
    }
}
