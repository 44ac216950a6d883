//! Quoting API Server Binary
//!
//! This binary starts the HTTP API server for the pet insurance quoting
//! engine.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin petquote-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8080 cargo run --bin petquote-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_RATE_TABLE_PATH` - Optional path to a rating-table JSON override
//! * `API_RISK_TABLE_PATH` - Optional path to a risk-table JSON override

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_quote::{PremiumCalculator, RateTable, RiskTable};
use interface_api::{config::ApiConfig, create_router};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration and rating tables, and
/// starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting pet insurance quoting API"
    );

    let calculator = Arc::new(build_calculator(&config)?);

    let app = create_router(calculator, config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("invalid server address")?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to default values if environment variables are not set.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| ApiConfig {
        host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: std::env::var("API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080),
        log_level: std::env::var("API_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
        rate_table_path: std::env::var("API_RATE_TABLE_PATH").ok(),
        risk_table_path: std::env::var("API_RISK_TABLE_PATH").ok(),
    })
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Builds the premium calculator, honoring table overrides from config.
///
/// The built-in tables are used unless the configuration points at
/// versioned JSON replacements from the actuarial owner.
fn build_calculator(config: &ApiConfig) -> anyhow::Result<PremiumCalculator> {
    let rate_table = match &config.rate_table_path {
        Some(path) => {
            tracing::info!(%path, "Loading rating table override");
            RateTable::from_json_file(Path::new(path))
                .with_context(|| format!("failed to load rating table from {path}"))?
        }
        None => RateTable::standard(),
    };

    let risk_table = match &config.risk_table_path {
        Some(path) => {
            tracing::info!(%path, "Loading risk table override");
            RiskTable::from_json_file(Path::new(path))
                .with_context(|| format!("failed to load risk table from {path}"))?
        }
        None => RiskTable::standard(),
    };

    Ok(PremiumCalculator::new(rate_table, risk_table))
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
