// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::forecast_extractor::ForecastExtractor;
use crate::application::forecast_service::ForecastService;
use crate::infrastructure::config::load_settings;
use crate::infrastructure::http_gateway::{build_http_client, HttpUpstreamGateway};
use crate::infrastructure::tz_lookup::TzfTimezoneResolver;
use crate::presentation::app_state::AppState;
use crate::presentation::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let settings = load_settings()?;
    let default_location = settings.default_location.to_default_location()?;
    let report_time = settings.report.report_time()?;

    // Process-wide services (infrastructure layer)
    let client = build_http_client(&settings.upstream)?;
    let gateway = Arc::new(HttpUpstreamGateway::new(
        client,
        settings.upstream.clone(),
        &settings.cache,
    ));
    let resolver = Arc::new(TzfTimezoneResolver::new());

    // Create services (application layer)
    let extractor = ForecastExtractor::new(resolver, report_time);
    let forecast_service = ForecastService::new(gateway, extractor, default_location);

    // Create application state
    let state = Arc::new(AppState { forecast_service });

    // Build router (presentation layer)
    let router = build_router(state, settings.server.request_timeout());

    // Start server
    let addr: SocketAddr = settings.server.bind_addr.parse()?;
    tracing::info!(%addr, "Starting polako-weather service");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
