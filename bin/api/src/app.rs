//! Application assembly: routes, docs and the middleware stack.

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, middleware};
use rezgenie_core::policy::DOCS_PATH;
use rezgenie_core::{RequestPolicy, Settings};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::middleware::{cors, errors, timing, trusted_host};
use crate::openapi::{self, ApiDoc};
use crate::routes::{self, API_V1, system};
use crate::{AppState, ErrorBody};

/// Build the full application router.
pub fn build(state: AppState) -> Router {
    let state = Arc::new(state);

    let mut router = Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/openapi.json", get(openapi::openapi_json))
        .nest(API_V1, routes::api_router())
        .fallback(not_found)
        .with_state(Arc::clone(&state));

    if state.policy.expose_docs {
        router = router.merge(Scalar::with_url(DOCS_PATH, ApiDoc::openapi()));
    }

    tracing::info!(
        environment = %state.policy.environment,
        docs = state.policy.expose_docs,
        trusted_hosts = state.policy.trusted_hosts.is_some(),
        debug = state.policy.debug,
        "Application assembled"
    );

    with_middleware(router, &state.settings, &state.policy)
}

/// Wrap `router` in the middleware stack selected by `policy`.
pub fn with_middleware(router: Router, settings: &Settings, policy: &RequestPolicy) -> Router {
    let mut router = router;

    if policy.debug {
        router = router.layer(middleware::from_fn(errors::expose_error_details));
    }

    router = router
        .layer(errors::catch_panic_layer(policy.debug))
        .layer(cors::cors_layer(&settings.cors_origins));

    if let Some(hosts) = &policy.trusted_hosts {
        let trusted = Arc::new(trusted_host::TrustedHosts::new(hosts));
        router = router.layer(middleware::from_fn_with_state(
            trusted,
            trusted_host::enforce,
        ));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(timing::process_time))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(
            "Not Found",
            "The requested resource does not exist",
        )),
    )
}
