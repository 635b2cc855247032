//! Clockwork terminal client binary.

use anyhow::Context;
use clockwork::{ClientConfig, build_api, run_client};
use clockwork_infrastructure::{ChronoTzResolver, SystemClock};
use clockwork_ui::ClientRuntime;
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the clock.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::load().context("failed to load client configuration")?;
    tracing::info!(
        server_url = %config.server_url,
        "Starting Clockwork client v{}",
        env!("CARGO_PKG_VERSION")
    );

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?
        .block_on(async {
            let api = build_api(&config).context("failed to build server client")?;
            let runtime = ClientRuntime::new(api, SystemClock::new(), ChronoTzResolver::new());

            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            run_client(runtime, stdin, &mut stdout).await?;
            Ok::<_, anyhow::Error>(())
        })?;

    Ok(())
}
