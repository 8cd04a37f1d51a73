//! Trusted-host enforcement.
//!
//! Requests whose `Host` does not match the allow-list are rejected with 400
//! before reaching any handler. Patterns are `*`, `*.suffix`, or an exact host;
//! any other use of `*` is dropped with a warning.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::ErrorBody;

#[derive(Debug, Clone, PartialEq, Eq)]
enum HostPattern {
    Any,
    /// Stored with its leading dot: `*.rezgenie.com` → `.rezgenie.com`.
    Subdomain(String),
    Exact(String),
}

impl HostPattern {
    /// `None` for empty patterns and for `*` anywhere but a leading `*.`.
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim().to_ascii_lowercase();
        if raw == "*" {
            return Some(HostPattern::Any);
        }
        if let Some(suffix) = raw.strip_prefix("*.") {
            if suffix.is_empty() || suffix.contains('*') {
                return None;
            }
            return Some(HostPattern::Subdomain(format!(".{suffix}")));
        }
        if raw.is_empty() || raw.contains('*') {
            return None;
        }
        Some(HostPattern::Exact(raw))
    }

    fn matches(&self, host: &str) -> bool {
        match self {
            HostPattern::Any => true,
            HostPattern::Subdomain(suffix) => host.ends_with(suffix.as_str()),
            HostPattern::Exact(exact) => host == exact,
        }
    }
}

/// Compiled host allow-list.
#[derive(Debug, Clone)]
pub struct TrustedHosts {
    patterns: Vec<HostPattern>,
}

impl TrustedHosts {
    pub fn new(patterns: &[String]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|raw| {
                let parsed = HostPattern::parse(raw);
                if parsed.is_none() {
                    tracing::warn!(pattern = %raw, "Ignoring invalid trusted host pattern");
                }
                parsed
            })
            .collect();
        Self { patterns }
    }

    /// `host` may include a port; it is compared case-insensitively.
    pub fn is_allowed(&self, host: &str) -> bool {
        let host = strip_port(host.trim()).to_ascii_lowercase();
        !host.is_empty() && self.patterns.iter().any(|p| p.matches(&host))
    }
}

/// `example.com:8000` → `example.com`, `[::1]:8000` → `[::1]`.
fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }
    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}

/// Reject requests whose host is not trusted.
pub async fn enforce(
    State(hosts): State<Arc<TrustedHosts>>,
    request: Request,
    next: Next,
) -> Response {
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| request.uri().authority().map(|a| a.as_str()))
        .unwrap_or_default();

    if hosts.is_allowed(host) {
        return next.run(request).await;
    }

    tracing::warn!(host = %host, path = %request.uri().path(), "Rejected untrusted host");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody::new("Bad Request", "Invalid host header")),
    )
        .into_response()
}
