// HTTP request handlers
use crate::application::search_service::SearchService;
use crate::application::weather_provider::ProviderError;
use crate::infrastructure::chunked_stream::stream_from_receiver;
use crate::infrastructure::http_response::{json_response, svg_response};
use crate::infrastructure::svg::{render_radar, render_series};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct CityQuery {
    pub q: Option<String>,
}

fn accepts_brotli(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.contains("br"))
        .unwrap_or(false)
}

fn error_status(e: &anyhow::Error) -> StatusCode {
    match e.downcast_ref::<ProviderError>() {
        Some(ProviderError::UnknownCity(_)) => StatusCode::NOT_FOUND,
        _ => {
            tracing::error!("Request failed: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn into_response(result: Result<Response, StatusCode>) -> Response {
    result.unwrap_or_else(|status| status.into_response())
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// City suggestions for the search box
pub async fn list_cities(
    Query(query): Query<CityQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let q = query.q.unwrap_or_default();
    match state.search_service.suggestions(&q).await {
        Ok(cities) => into_response(json_response(&cities, accepts_brotli(&headers)).await),
        Err(e) => {
            tracing::error!("Error fetching cities: {}", e);
            // Search degrades to no suggestions
            into_response(json_response(&Vec::<String>::new(), accepts_brotli(&headers)).await)
        }
    }
}

async fn dashboard_response(state: &AppState, city: &str, compress: bool) -> Response {
    let Some(city) = SearchService::resolve(city) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    match state.dashboard_service.get_dashboard(&city).await {
        Ok(dashboard) => into_response(json_response(&dashboard, compress).await),
        Err(e) => error_status(&e).into_response(),
    }
}

/// Dashboard for the configured default city
pub async fn default_dashboard(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    dashboard_response(&state, &state.default_city, accepts_brotli(&headers)).await
}

pub async fn get_dashboard(
    Path(city): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    dashboard_response(&state, &city, accepts_brotli(&headers)).await
}

/// Stream dashboard sections as they are built (progressive loading)
pub async fn stream_dashboard(
    Path(city): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(city) = SearchService::resolve(&city) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let rx = state.streaming_service.stream_dashboard(&city).await;
    stream_from_receiver(rx, accepts_brotli(&headers)).into_response()
}

pub async fn forecast_detail(
    Path((city, date)): Path<(String, String)>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Ok(date) = NaiveDate::parse_from_str(&date, "%Y-%m-%d") else {
        return (StatusCode::BAD_REQUEST, "date must be YYYY-MM-DD").into_response();
    };
    match state.dashboard_service.forecast_detail(&city, date).await {
        Ok(Some(detail)) => into_response(json_response(&detail, accepts_brotli(&headers)).await),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => error_status(&e).into_response(),
    }
}

pub async fn radar_svg(
    Path(city): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.dashboard_service.radar_chart(&city).await {
        Ok(chart) => {
            into_response(svg_response(render_radar(&chart), accepts_brotli(&headers)).await)
        }
        Err(e) => error_status(&e).into_response(),
    }
}

pub async fn week_svg(
    Path(city): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.dashboard_service.week_chart(&city).await {
        Ok(chart) => {
            into_response(svg_response(render_series(&chart), accepts_brotli(&headers)).await)
        }
        Err(e) => error_status(&e).into_response(),
    }
}
