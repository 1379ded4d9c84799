//! token-gate - A stateless JWT bearer-token authentication gateway
//!
//! This is the main entry point for the token-gate application.

use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing::info;

use token_gate::auth::{AuthManager, TokenService};
use token_gate::config::Config;
use token_gate::server::{AppState, Server};
use token_gate::store::MemoryUserStore;

/// token-gate - A stateless JWT bearer-token authentication gateway
#[derive(Parser, Debug)]
#[command(name = "token-gate")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, env = "TOKEN_GATE_CONFIG")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load and validate configuration; a misconfigured signing key must stop
    // the process here, not fail per-request later
    let config = load_config(&args)?;
    config.validate()?;

    // Initialize tracing/logging
    init_tracing(&config)?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting token-gate");

    // Build the user store from configured credentials
    let store = Arc::new(MemoryUserStore::from_config(&config.auth.users)?);
    info!(users = store.len(), "User store initialized");

    // Build the token service and authentication manager
    let tokens = TokenService::new(&config.auth.signing_key, config.auth.token_ttl_secs);
    let auth_manager = Arc::new(AuthManager::new(Arc::clone(&store), tokens));
    info!(
        token_ttl_secs = config.auth.token_ttl_secs,
        "Authentication manager initialized"
    );

    // Create application state
    let state = AppState { auth_manager };

    // Create and start the HTTP server
    let server = Server::new(config.server.clone(), state);
    let shutdown_signal = shutdown_signal();

    info!(
        host = %config.server.host,
        port = %config.server.port,
        "Starting HTTP server"
    );

    server.run(shutdown_signal).await?;

    info!("token-gate shutdown complete");

    Ok(())
}

/// Load configuration from file or environment
fn load_config(args: &Args) -> anyhow::Result<Config> {
    match &args.config {
        Some(path) => {
            // Use eprintln! since tracing is not yet initialized
            eprintln!("Loading configuration from file: {}", path);
            Config::from_file(path).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
        }
        None => {
            // Use eprintln! since tracing is not yet initialized
            eprintln!("Loading configuration from environment variables");
            Config::from_env().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
        }
    }
}

/// Initialize the tracing subscriber from the logging configuration
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

/// Create a future that resolves when a shutdown signal is received
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
