use anyhow::Context;
use axum::http::HeaderValue;
use clap::Parser;
use organisations::HttpConceptsClient;
use organisations_api::{create_router, logging, AppConfig, AppState, ServiceInfo};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();

    logging::init_logging(&config).context("Failed to initialize logging")?;

    let cache_control = config.cache_control_header()?;
    let cache_control = HeaderValue::from_str(&cache_control)
        .context("Cache-Control value is not a valid header")?;

    let concepts = HttpConceptsClient::new(config.concepts_api_url.clone())
        .context("Failed to build concepts API client")?;

    let state = Arc::new(AppState::new(
        Arc::new(concepts),
        cache_control,
        ServiceInfo {
            system_code: config.app_system_code.clone(),
            name: config.app_name.clone(),
            panic_guide: config.panic_guide.clone(),
        },
    ));

    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener on {addr}"))?;

    tracing::info!(
        port = config.port,
        concepts_api_url = %config.concepts_api_url,
        cache_duration = %config.cache_duration,
        "Public organisations API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server terminated unexpectedly")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for SIGTERM or SIGINT.
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm =
        signal(SignalKind::terminate()).expect("Failed to install SIGTERM signal handler");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("SIGINT received, starting graceful shutdown...");
        }
        _ = sigterm.recv() => {
            tracing::info!("SIGTERM received, starting graceful shutdown...");
        }
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
