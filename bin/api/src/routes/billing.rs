//! # Billing — Stripe plans and webhooks
//!
//! Routes:
//! - GET  /api/v1/billing/plans — plan tiers and their Stripe price ids
//! - POST /api/v1/billing/webhook — signed Stripe event deliveries

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use rezgenie_billing::webhook::{self, SIGNATURE_HEADER, WebhookEvent};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{ApiError, ErrorBody, SharedState};

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/plans", get(list_plans))
        .route("/webhook", post(stripe_webhook))
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlanPrice {
    pub tier: String,
    pub price_id: String,
    pub configured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WebhookAck {
    pub received: bool,
    #[serde(rename = "type")]
    pub event_type: String,
    /// Plan tier of the subscription item the event refers to, when known.
    pub tier: Option<String>,
}

/// GET /api/v1/billing/plans
#[utoipa::path(
    get,
    path = "/api/v1/billing/plans",
    tag = "billing",
    responses((status = 200, description = "Plan catalog", body = [PlanPrice]))
)]
pub async fn list_plans(State(state): State<SharedState>) -> Json<Vec<PlanPrice>> {
    let plans = state
        .billing
        .catalog()
        .iter()
        .map(|(tier, price_id)| PlanPrice {
            tier: tier.as_str().to_owned(),
            price_id: price_id.to_owned(),
            configured: !price_id.is_empty(),
        })
        .collect();
    Json(plans)
}

/// POST /api/v1/billing/webhook
#[utoipa::path(
    post,
    path = "/api/v1/billing/webhook",
    tag = "billing",
    request_body(content = String, description = "Raw Stripe event JSON"),
    responses(
        (status = 200, description = "Event accepted", body = WebhookAck),
        (status = 400, description = "Missing or invalid signature", body = ErrorBody),
    )
)]
pub async fn stripe_webhook(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookAck>, ApiError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::BadRequest("Missing Stripe-Signature header".to_owned()))?;

    let event = webhook::construct_event(
        &body,
        signature,
        state.billing.webhook_secret(),
        chrono::Utc::now().timestamp(),
    )?;

    let tier = subscribed_price(&event)
        .and_then(|price| state.billing.catalog().tier_for_price(price))
        .map(|tier| tier.as_str().to_owned());

    tracing::info!(
        event_id = %event.id,
        event_type = %event.event_type,
        tier = tier.as_deref().unwrap_or("-"),
        "Stripe webhook received"
    );

    Ok(Json(WebhookAck {
        received: true,
        event_type: event.event_type,
        tier,
    }))
}

/// Price id of the first subscription item, for subscription and invoice events.
fn subscribed_price(event: &WebhookEvent) -> Option<&str> {
    event
        .data
        .pointer("/object/items/data/0/price/id")
        .or_else(|| event.data.pointer("/object/lines/data/0/price/id"))
        .and_then(|v| v.as_str())
}
