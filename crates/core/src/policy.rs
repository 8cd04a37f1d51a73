//! Environment-keyed request policy.
//!
//! Every environment-dependent switch the HTTP layer needs lives in one table
//! and is resolved once at startup.

use crate::{Environment, Settings};

/// Value reported in the root endpoint's `docs` field when docs are hidden.
pub const DOCS_UNAVAILABLE: &str = "Documentation not available in production";

/// Path of the interactive documentation UI.
pub const DOCS_PATH: &str = "/docs";

/// One row of the policy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PolicyRow {
    expose_docs: bool,
    enforce_trusted_hosts: bool,
    allow_debug: bool,
}

const DEVELOPMENT: PolicyRow = PolicyRow {
    expose_docs: true,
    enforce_trusted_hosts: false,
    allow_debug: true,
};

const PRODUCTION: PolicyRow = PolicyRow {
    expose_docs: false,
    enforce_trusted_hosts: true,
    allow_debug: false,
};

const OTHER: PolicyRow = PolicyRow {
    expose_docs: true,
    enforce_trusted_hosts: false,
    allow_debug: true,
};

fn row_for(environment: &Environment) -> PolicyRow {
    match environment {
        Environment::Development => DEVELOPMENT,
        Environment::Production => PRODUCTION,
        Environment::Other(_) => OTHER,
    }
}

/// Resolved request-gating policy injected into the middleware stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPolicy {
    pub environment: Environment,
    pub expose_docs: bool,
    /// Host allow-list to enforce; `None` bypasses host validation.
    pub trusted_hosts: Option<Vec<String>>,
    pub debug: bool,
}

impl RequestPolicy {
    pub fn from_settings(settings: &Settings) -> Self {
        let row = row_for(&settings.environment);
        if row.enforce_trusted_hosts && settings.allowed_hosts.is_empty() {
            tracing::warn!(
                environment = %settings.environment,
                "ALLOWED_HOSTS is empty; every request will be rejected"
            );
        }
        Self {
            environment: settings.environment.clone(),
            expose_docs: row.expose_docs,
            trusted_hosts: row
                .enforce_trusted_hosts
                .then(|| settings.allowed_hosts.clone()),
            debug: row.allow_debug && settings.debug,
        }
    }

    /// Value of the root endpoint's `docs` field.
    pub fn docs_field(&self) -> &'static str {
        if self.expose_docs {
            DOCS_PATH
        } else {
            DOCS_UNAVAILABLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(environment: &str, debug: bool) -> Settings {
        let debug = debug.to_string();
        Settings::from_lookup(|key| match key {
            "ENVIRONMENT" => Some(environment.to_owned()),
            "DEBUG" => Some(debug.clone()),
            "ALLOWED_HOSTS" => Some("api.rezgenie.com".to_owned()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn production_hides_docs_and_enforces_hosts() {
        let policy = RequestPolicy::from_settings(&settings("production", true));
        assert!(!policy.expose_docs);
        assert_eq!(policy.docs_field(), DOCS_UNAVAILABLE);
        assert_eq!(
            policy.trusted_hosts.as_deref(),
            Some(&["api.rezgenie.com".to_owned()][..])
        );
        assert!(!policy.debug, "production never runs in debug");
    }

    #[test]
    fn development_exposes_docs_and_skips_hosts() {
        let policy = RequestPolicy::from_settings(&settings("development", true));
        assert!(policy.expose_docs);
        assert_eq!(policy.docs_field(), "/docs");
        assert!(policy.trusted_hosts.is_none());
        assert!(policy.debug);
    }

    #[test]
    fn other_environments_behave_like_development() {
        let policy = RequestPolicy::from_settings(&settings("staging", false));
        assert_eq!(policy.environment, Environment::Other("staging".into()));
        assert_ne!(policy.docs_field(), DOCS_UNAVAILABLE);
        assert!(policy.trusted_hosts.is_none());
        assert!(!policy.debug);
    }
}
