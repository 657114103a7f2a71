//! Connect Four HTTP server.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use connect_four_server::{GameTable, ServerConfig, router};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("info,connect_four=debug,connect_four_server=debug")
        }))
        .init();

    let config = ServerConfig::load(&cli.config)?.with_overrides(cli.host, cli.port, cli.ai_delay_ms);
    run_http_server(config).await
}

/// Serves the game until Ctrl+C.
#[instrument]
async fn run_http_server(config: ServerConfig) -> Result<()> {
    info!(
        ai_delay_ms = *config.ai_delay_ms(),
        "Starting Connect Four server"
    );

    let table = GameTable::new(config.ai_delay());
    let app = router(table);

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!("Server ready at http://{}:{}/", config.host(), config.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
