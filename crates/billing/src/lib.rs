pub mod catalog;
pub mod client;
pub mod error;
pub mod webhook;

pub use catalog::{PlanTier, PriceCatalog};
pub use client::StripeClient;
pub use error::BillingError;
