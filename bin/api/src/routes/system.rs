//! Root and health endpoints.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{API_VERSION, SERVICE_NAME, SharedState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl HealthResponse {
    fn healthy() -> Self {
        Self {
            status: "healthy".to_owned(),
            service: SERVICE_NAME.to_owned(),
            version: API_VERSION.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    /// Docs path, or a notice when docs are disabled.
    pub docs: String,
    pub health: String,
}

/// GET / — service banner.
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses((status = 200, description = "Service banner", body = RootResponse))
)]
pub async fn root(State(state): State<SharedState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to {SERVICE_NAME}"),
        version: API_VERSION.to_owned(),
        docs: state.policy.docs_field().to_owned(),
        health: "/health".to_owned(),
    })
}

/// GET /health — liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// GET /api/v1/health — liveness probe under the versioned prefix.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn versioned_health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
