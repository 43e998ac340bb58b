// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use axum::{Router, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::search_service::SearchService;
use crate::application::streaming_service::StreamingDashboardService;
use crate::application::weather_provider::WeatherProvider;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::fixture_provider::StaticWeatherProvider;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    default_dashboard, forecast_detail, get_dashboard, health_check, list_cities, radar_svg,
    stream_dashboard, week_svg,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Create provider (infrastructure layer)
    let provider: Arc<dyn WeatherProvider> = match &config.fixtures {
        Some(path) => Arc::new(StaticWeatherProvider::from_json_file(path).await?),
        None => Arc::new(StaticWeatherProvider::builtin()),
    };

    // Create services (application layer)
    let dashboard_service = DashboardService::new(provider.clone(), config.clone());
    let search_service = SearchService::new(provider, config.dashboard.max_suggestions);
    let streaming_service = StreamingDashboardService::new(dashboard_service.clone());

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        search_service,
        streaming_service,
        default_city: config.dashboard.default_city.clone(),
    });

    // Build router (presentation layer)
    // Compression is negotiated per response, so no CompressionLayer
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/cities", get(list_cities))
        .route("/dashboards", get(default_dashboard))
        .route("/dashboards/:city", get(get_dashboard))
        .route("/dashboards/:city/stream", get(stream_dashboard))
        .route("/dashboards/:city/forecast/:date", get(forecast_detail))
        .route("/charts/:city/radar.svg", get(radar_svg))
        .route("/charts/:city/week.svg", get(week_svg))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.addr.parse()?;
    tracing::info!("Starting weather-command service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
