//! mcctl-bot entry point.
//!
//! Initialises tracing, loads configuration from environment variables,
//! and runs the Telegram receive loop until Ctrl-C.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use mcctl_bot::app::App;
use mcctl_bot::infra::config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match config::load() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(error = %format!("{error:#}"), "invalid configuration");
            std::process::exit(1);
        }
    };

    tracing::info!(
        instance_id = %config.aws_instance_id,
        region = %config.aws_region,
        game_server = %config.game_server_url(),
        "mcctl-bot starting",
    );

    App::new(&config)?.run(shutdown_signal()).await?;

    tracing::info!("mcctl-bot shut down");
    Ok(())
}

/// Wait for SIGINT (Ctrl-C) for graceful shutdown.
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("received shutdown signal");
}
