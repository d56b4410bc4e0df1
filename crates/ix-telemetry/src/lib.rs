//! # Interactions Relay Telemetry
//!
//! Structured logging for every crate in the workspace. Libraries only use
//! the `tracing` macros; the binary calls [`init_telemetry`] once at startup.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ix_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_telemetry(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `IX_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter |
//! | `IX_JSON_LOGS` | `false` | One JSON object per line |
//! | `IX_SERVICE_NAME` | `interactions-relay` | Name in the startup line |
//! | `NO_COLOR` | unset | Disable ANSI colours |

mod config;
mod tracing_setup;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use tracing_setup::build_filter;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Install the global tracing subscriber.
///
/// Fails if the filter directive does not parse or a global subscriber is
/// already set.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_setup::init_tracing(config)?;

    tracing::info!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        json = config.json_logs,
        filter = %config.log_level,
        "Telemetry initialized"
    );
    Ok(())
}
