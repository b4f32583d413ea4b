//! API Handlers
//!
//! HTTP request handlers for the health and statistics endpoints.

use std::time::Instant;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::error::Result;
use crate::health::{self, HealthStatus};
use crate::models::{HealthReport, LivenessResponse, ReadinessResponse, StatsResponse};
use crate::service::CacheService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache handle
    pub cache: CacheService,
    /// Process start, reported as uptime
    pub started_at: Instant,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: CacheService) -> Self {
        Self {
            cache,
            started_at: Instant::now(),
        }
    }
}

/// Handler for GET /health
///
/// Detailed report; 503 when the service is unhealthy.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let report = health::health_report(&state.cache, state.started_at);
    let status = match report.status {
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
    };
    (status, Json(report))
}

/// Handler for GET /health/live
pub async fn liveness_handler() -> Json<LivenessResponse> {
    Json(LivenessResponse::alive())
}

/// Handler for GET /health/ready
pub async fn readiness_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let response = health::readiness(&state.cache);
    let status = if response.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response))
}

/// Handler for GET /health/metrics
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = health::render_metrics(&state.cache.stats(), state.started_at);
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let stats = state.cache.try_stats()?;
    Ok(Json(stats.into()))
}
