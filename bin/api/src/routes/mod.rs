//! # Route Modules
//!
//! Each module defines an axum `Router` for one API surface area. They are
//! composed here under disjoint prefixes and nested at `/api/v1` by the app.

pub mod auth;
pub mod billing;
pub mod jobs;
pub mod resumes;
pub mod system;
pub mod wishes;

use axum::Router;
use axum::routing::get;

use crate::SharedState;

/// Version prefix every business router is nested under.
pub const API_V1: &str = "/api/v1";

/// Compose the versioned API: health plus one sub-router per surface area.
pub fn api_router() -> Router<SharedState> {
    Router::new()
        .route("/health", get(system::versioned_health))
        .nest("/auth", auth::router())
        .nest("/resumes", resumes::router())
        .nest("/jobs", jobs::router())
        .nest("/wishes", wishes::router())
        .nest("/billing", billing::router())
}
