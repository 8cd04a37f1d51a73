//! RezGenie API: axum application assembly, middleware and routes.
//!
//! The binary in `main.rs` loads settings, prepares the database and serves
//! the router built by [`app::build`].

pub mod app;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorBody};
pub use state::{AppState, SharedState};

/// Public service name reported by the health endpoints.
pub const SERVICE_NAME: &str = "RezGenie API";

/// API version reported by the root and health endpoints.
pub const API_VERSION: &str = "1.0.0";
