//! # Jobs — job postings and resume/job matching
//!
//! Mounted at `/api/v1/jobs`. Placeholder: the prefix and its OpenAPI tag are
//! reserved, no handlers are registered yet.

use axum::Router;

use crate::SharedState;

pub fn router() -> Router<SharedState> {
    Router::new()
}
