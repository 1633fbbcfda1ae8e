//! Roster Server: access-controlled escort directory gateway.
//!
//! Main entry point that wires the crates together and starts the server.

use std::future::IntoFuture;
use std::sync::Arc;

use clap::Parser;
use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use roster_api::state::AppState;
use roster_auth::session::{HttpSessionStore, MemorySessionStore, SessionStore};
use roster_core::clock::SystemClock;
use roster_core::config::{AppConfig, IdentityProviderKind};
use roster_core::error::AppError;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "roster-server", version, about = "Roster directory gateway")]
struct Args {
    /// Environment overlay loaded after `default.toml`.
    #[arg(long, env = "ROSTER_ENV", default_value = "development")]
    env: String,

    /// Directory holding the TOML configuration files.
    #[arg(long, env = "ROSTER_CONFIG_DIR", default_value = "config")]
    config_dir: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match AppConfig::load_from(&args.config_dir, &args.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %args.env, dir = %args.config_dir, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Builds the session store selected by `identity.provider`.
fn build_session_store(config: &AppConfig) -> Result<Arc<dyn SessionStore>, AppError> {
    match config.identity.provider {
        IdentityProviderKind::Memory => {
            tracing::warn!("Using in-memory session store; every protected request will redirect");
            Ok(Arc::new(MemorySessionStore::new()))
        }
        IdentityProviderKind::Http => {
            tracing::info!(base_url = %config.identity.base_url, "Using HTTP identity provider");
            Ok(Arc::new(HttpSessionStore::new(&config.identity)?))
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Roster v{}", env!("CARGO_PKG_VERSION"));

    let store = build_session_store(&config)?;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);

    let app_state = AppState::new(config, store, Arc::new(SystemClock));
    let app = roster_api::router::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Roster server listening on {}", addr);

    // Connections get `shutdown_grace_seconds` to drain after the signal.
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });
    let mut server = tokio::spawn(server.into_future());

    tokio::select! {
        joined = &mut server => return server_result(joined),
        _ = shutdown_rx.changed() => {}
    }

    match tokio::time::timeout(grace, &mut server).await {
        Ok(joined) => server_result(joined)?,
        Err(_) => {
            server.abort();
            tracing::warn!(
                grace_seconds = grace.as_secs(),
                "Grace period elapsed, dropping open connections"
            );
        }
    }

    tracing::info!("Roster server shut down gracefully");
    Ok(())
}

fn server_result(
    joined: Result<std::io::Result<()>, tokio::task::JoinError>,
) -> Result<(), AppError> {
    match joined {
        Ok(result) => result.map_err(|e| AppError::internal(format!("Server error: {}", e))),
        Err(e) => Err(AppError::internal(format!("Server task failed: {}", e))),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
