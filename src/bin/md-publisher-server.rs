//! md-publisher HTTP API server.

use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::signal;
use tower_http::trace::TraceLayer;

use md_publisher::server::{AppState, Config, build_cors_layer, init_logging, router};

const DEFAULT_CONFIG_PATH: &str = "md-publisher.toml";

/// md-publisher HTTP API server.
#[derive(Parser, Debug)]
#[command(name = "md-publisher-server")]
#[command(about = "HTTP API server for publishing markdown notes")]
struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// API key required on write endpoints (overrides the config file).
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

/// Load the config file; a missing default file means built-in defaults.
fn load_config(path: &Path) -> anyhow::Result<(Config, bool)> {
    if !path.exists() && path == Path::new(DEFAULT_CONFIG_PATH) {
        return Ok((Config::default(), false));
    }
    Ok((Config::from_file(path)?, true))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration first (needed for logging setup)
    let (mut config, from_file) = load_config(&args.config)?;
    if let Some(api_key) = args.api_key {
        config.auth.api_key = Some(api_key);
    }
    let bind_addr = config.bind_addr();

    init_logging(&config.logging)?;

    if from_file {
        tracing::info!("Loaded configuration from {}", args.config.display());
    } else {
        tracing::info!("No configuration file found, using defaults");
    }

    if config.auth.api_key().is_none() {
        tracing::warn!(
            "API key not set. Protected endpoints will be accessible without authentication."
        );
    }

    tracing::info!("Opening note database at {}", config.storage.path);
    let state = AppState::from_config(&config)?;

    let cors = build_cors_layer(&config.cors);
    if config.cors.enabled {
        tracing::info!(
            "CORS enabled with {} allowed origin(s)",
            config.cors.allow_origins.len()
        );
    } else {
        tracing::info!("CORS disabled (denying cross-origin requests)");
    }

    let app: Router = router(state.clone())
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = bind_addr.parse()?;

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.notes().close()?;
    tracing::info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
