//! Tower/axum middleware stack.
//!
//! Outermost first: process timing, request tracing, trusted-host enforcement
//! (production only), CORS, panic capture, debug error details.

pub mod cors;
pub mod errors;
pub mod timing;
pub mod trusted_host;
