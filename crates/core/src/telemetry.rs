use tracing_subscriber::{EnvFilter, fmt};

/// Log directives used when `RUST_LOG` is unset.
///
/// Debug turns on RezGenie's own crates and request tracing; sqlx stays at
/// `warn` so every statement is not echoed.
pub fn default_directives(debug: bool) -> &'static str {
    if debug {
        "info,rezgenie_api=debug,rezgenie_core=debug,rezgenie_storage=debug,rezgenie_billing=debug,tower_http=debug,sqlx=warn"
    } else {
        "info,sqlx=warn"
    }
}

/// Install the process-wide subscriber for the API server and migration CLI.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(debug)));

    fmt().with_env_filter(filter).with_target(true).init();
}
