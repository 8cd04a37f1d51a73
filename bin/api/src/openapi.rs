//! # OpenAPI document
//!
//! Assembles the utoipa-documented routes into one document, served at
//! `/openapi.json`. The Scalar UI at `/docs` renders the same document.

use axum::Json;
use utoipa::OpenApi;

use crate::routes::{auth, billing, system};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RezGenie API",
        version = "1.0.0",
        description = "Backend for RezGenie: resume analysis, job matching and subscriptions."
    ),
    paths(
        system::root,
        system::health,
        system::versioned_health,
        auth::get_user,
        auth::update_user_name,
        billing::list_plans,
        billing::stripe_webhook,
    ),
    components(schemas(
        crate::error::ErrorBody,
        system::HealthResponse,
        system::RootResponse,
        auth::UserProfile,
        auth::UpdateNameRequest,
        billing::PlanPrice,
        billing::WebhookAck,
    )),
    tags(
        (name = "system", description = "Service banner"),
        (name = "health", description = "Liveness probes"),
        (name = "auth", description = "Accounts and profiles"),
        (name = "resumes", description = "Resume upload and analysis"),
        (name = "jobs", description = "Job postings and matching"),
        (name = "wishes", description = "Saved job wishes"),
        (name = "billing", description = "Stripe plans and webhooks"),
    )
)]
pub struct ApiDoc;

/// GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
