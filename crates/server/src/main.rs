//! Clockwork time server binary.

use anyhow::Context;
use clockwork_server::ServerConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::load().context("failed to load server configuration")?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        display_timezone = config.display_timezone.as_deref().unwrap_or("host local"),
        "Starting Clockwork server v{}",
        env!("CARGO_PKG_VERSION")
    );

    clockwork_server::run_server(config).await?;

    Ok(())
}
