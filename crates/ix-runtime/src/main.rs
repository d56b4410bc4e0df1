//! Interactions relay binary.

use std::sync::Arc;

use anyhow::Result;
use ix_runtime::{load_config, RelayRuntime};
use ix_telemetry::{init_telemetry, TelemetryConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry(&TelemetryConfig::from_env())?;

    let config = load_config();
    let runtime = Arc::new(RelayRuntime::new(config)?);

    let mut server = {
        let runtime = Arc::clone(&runtime);
        tokio::spawn(async move { runtime.start().await })
    };

    info!("Relay is running. Press Ctrl+C to stop.");
    tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal?;
            runtime.shutdown();
            server.await??;
        }
        // Bind or serve failure before any signal
        result = &mut server => {
            result??;
        }
    }

    info!("Shutdown complete");
    Ok(())
}
