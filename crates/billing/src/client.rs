use std::fmt;

use rezgenie_core::Settings;

use crate::PriceCatalog;

/// Stripe configuration for the process: API key, webhook secret and prices.
///
/// Built once from [`Settings`]. A missing key is not an error here; Stripe
/// rejects unauthenticated calls itself.
#[derive(Clone)]
pub struct StripeClient {
    api_key: String,
    webhook_secret: String,
    catalog: PriceCatalog,
}

impl StripeClient {
    pub fn from_settings(settings: &Settings) -> Self {
        let client = Self {
            api_key: settings.stripe_secret_key.clone(),
            webhook_secret: settings.stripe_webhook_secret.clone(),
            catalog: PriceCatalog::new(
                settings.stripe_price_pro_monthly.clone(),
                settings.stripe_price_unlimited_monthly.clone(),
            ),
        };

        if client.is_configured() {
            tracing::info!(live = client.is_live(), "Stripe configured");
        } else {
            tracing::warn!("STRIPE_SECRET_KEY is not set; billing calls will be rejected");
        }
        client
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn webhook_secret(&self) -> &str {
        &self.webhook_secret
    }

    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Live-mode keys are prefixed `sk_live_` (or `rk_live_` for restricted keys).
    pub fn is_live(&self) -> bool {
        self.api_key.starts_with("sk_live_") || self.api_key.starts_with("rk_live_")
    }
}

impl fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeClient")
            .field("api_key", &"<redacted>")
            .field("webhook_secret", &"<redacted>")
            .field("catalog", &self.catalog)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlanTier;

    fn settings(key: &str) -> Settings {
        let key = key.to_owned();
        Settings::from_lookup(|name| match name {
            "STRIPE_SECRET_KEY" => Some(key.clone()),
            "STRIPE_PRICE_PRO_MONTHLY" => Some("price_pro".to_owned()),
            "STRIPE_PRICE_UNLIMITED_MONTHLY" => Some("price_unlimited".to_owned()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn reads_key_and_prices_from_settings() {
        let client = StripeClient::from_settings(&settings("sk_test_123"));
        assert!(client.is_configured());
        assert!(!client.is_live());
        assert_eq!(client.api_key(), "sk_test_123");
        assert_eq!(client.catalog().price_id(PlanTier::ProMonthly), "price_pro");
    }

    #[test]
    fn missing_key_is_not_an_error() {
        let client = StripeClient::from_settings(&settings(""));
        assert!(!client.is_configured());
    }

    #[test]
    fn debug_hides_key() {
        let client = StripeClient::from_settings(&settings("sk_live_secret"));
        assert!(client.is_live());
        assert!(!format!("{client:?}").contains("sk_live_secret"));
    }
}
