//! # Resumes — upload, parsing and scoring of user resumes
//!
//! Mounted at `/api/v1/resumes`. Placeholder: the prefix and its OpenAPI tag are
//! reserved, no handlers are registered yet.

use axum::Router;

use crate::SharedState;

pub fn router() -> Router<SharedState> {
    Router::new()
}
