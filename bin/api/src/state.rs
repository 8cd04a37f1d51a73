use std::sync::Arc;

use rezgenie_billing::StripeClient;
use rezgenie_core::{RequestPolicy, Settings};
use sqlx::PgPool;

/// Shared application state, handed to handlers behind an `Arc`.
#[derive(Debug)]
pub struct AppState {
    pub pool: PgPool,
    pub settings: Settings,
    pub policy: RequestPolicy,
    pub billing: StripeClient,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Resolve the request policy and Stripe configuration from `settings`.
    pub fn new(settings: Settings, pool: PgPool) -> Self {
        let policy = RequestPolicy::from_settings(&settings);
        let billing = StripeClient::from_settings(&settings);
        Self {
            pool,
            settings,
            policy,
            billing,
        }
    }
}
