//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Liveness payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Readiness payload with the storage check
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub storage: &'static str,
    pub storage_healthy: bool,
    pub timestamp: DateTime<Utc>,
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    })
}

/// Readiness check with storage health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let storage = state.storage();
    let healthy = storage.is_reachable().await;

    let response = ReadinessResponse {
        status: if healthy { "ready" } else { "not_ready" },
        storage: storage.name(),
        storage_healthy: healthy,
        timestamp: Utc::now(),
    };
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
