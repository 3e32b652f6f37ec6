//! Swatch API Server
//!
//! Renders solid-color and gradient PNGs described entirely by the URL path.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use swatch_api::build_router;
use swatch_api::config::{Args, LogFormat, ServerConfig};
use swatch_api::state::AppState;

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = ServerConfig::try_from(Args::parse())?;

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = config.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(run_server(config))
}

fn init_tracing(config: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = fmt().with_env_filter(filter).with_target(true).with_level(true);

    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

async fn run_server(config: ServerConfig) -> Result<()> {
    init_tracing(&config);

    info!("Starting swatch API server");

    let prometheus = metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;
    info!("Prometheus metrics exporter initialized");

    let addr = config.listen;
    let state = Arc::new(AppState::new(config, prometheus));
    let app = build_router(state);

    info!(address = %addr, "Swatch API listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
