use thiserror::Error;

/// Errors raised while handling Stripe data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingError {
    #[error("Malformed Stripe-Signature header: {0}")]
    MalformedHeader(String),

    #[error("Stripe-Signature header has no v1 signature")]
    MissingSignature,

    #[error("No signature matches the expected signature for the payload")]
    SignatureMismatch,

    #[error("Timestamp {timestamp} is outside the {tolerance}s tolerance window")]
    TimestampOutOfTolerance { timestamp: i64, tolerance: i64 },

    #[error("Webhook secret is not configured")]
    MissingSecret,

    #[error("Webhook secret cannot be used as an HMAC key")]
    InvalidSecret,

    #[error("Invalid webhook payload: {0}")]
    InvalidPayload(String),
}
