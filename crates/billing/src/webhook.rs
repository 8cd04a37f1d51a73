//! Stripe webhook verification.
//!
//! Stripe signs each delivery with HMAC-SHA256 over `"{timestamp}.{body}"` and
//! sends the result in the `Stripe-Signature` header as
//! `t=<unix seconds>,v1=<hex>[,v1=<hex>...]`. Other schemes (`v0`) are ignored.

use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use crate::BillingError;

type HmacSha256 = Hmac<Sha256>;

/// Name of the header carrying the signature.
pub const SIGNATURE_HEADER: &str = "stripe-signature";

/// Default maximum age of a delivery, in seconds.
pub const DEFAULT_TOLERANCE_SECS: i64 = 300;

/// Minimal envelope shared by every Stripe event.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl WebhookEvent {
    pub fn from_payload(payload: &[u8]) -> Result<Self, BillingError> {
        serde_json::from_slice(payload).map_err(|e| BillingError::InvalidPayload(e.to_string()))
    }
}

/// Verify the signature, then parse the event.
pub fn construct_event(
    payload: &[u8],
    header: &str,
    secret: &str,
    now: i64,
) -> Result<WebhookEvent, BillingError> {
    verify_signature(payload, header, secret, now, DEFAULT_TOLERANCE_SECS)?;
    WebhookEvent::from_payload(payload)
}

/// Hex-encoded v1 signature for `payload` signed at `timestamp`.
pub fn compute_signature(
    secret: &str,
    timestamp: i64,
    payload: &[u8],
) -> Result<String, BillingError> {
    let mac = signed_mac(secret, timestamp, payload)?;
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Check `header` against `payload`. Returns the signed timestamp on success.
pub fn verify_signature(
    payload: &[u8],
    header: &str,
    secret: &str,
    now: i64,
    tolerance: i64,
) -> Result<i64, BillingError> {
    if secret.is_empty() {
        return Err(BillingError::MissingSecret);
    }

    let parsed = SignatureHeader::parse(header)?;
    if parsed.v1.is_empty() {
        return Err(BillingError::MissingSignature);
    }

    let matched = parsed.v1.iter().any(|candidate| {
        let Ok(expected) = hex::decode(candidate) else {
            return false;
        };
        signed_mac(secret, parsed.timestamp, payload)
            .map(|mac| mac.verify_slice(&expected).is_ok())
            .unwrap_or(false)
    });
    if !matched {
        return Err(BillingError::SignatureMismatch);
    }

    if parsed.timestamp < now - tolerance {
        return Err(BillingError::TimestampOutOfTolerance {
            timestamp: parsed.timestamp,
            tolerance,
        });
    }

    Ok(parsed.timestamp)
}

fn signed_mac(secret: &str, timestamp: i64, payload: &[u8]) -> Result<HmacSha256, BillingError> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| BillingError::InvalidSecret)?;
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    Ok(mac)
}

struct SignatureHeader<'a> {
    timestamp: i64,
    v1: Vec<&'a str>,
}

impl<'a> SignatureHeader<'a> {
    fn parse(header: &'a str) -> Result<Self, BillingError> {
        let mut timestamp = None;
        let mut v1 = Vec::new();

        for item in header.split(',') {
            let (key, value) = item
                .trim()
                .split_once('=')
                .ok_or_else(|| BillingError::MalformedHeader(item.trim().to_owned()))?;
            match key {
                "t" => {
                    let t = value.parse::<i64>().map_err(|_| {
                        BillingError::MalformedHeader(format!("bad timestamp {value:?}"))
                    })?;
                    timestamp = Some(t);
                }
                "v1" => v1.push(value),
                _ => {}
            }
        }

        let timestamp =
            timestamp.ok_or_else(|| BillingError::MalformedHeader("missing timestamp".to_owned()))?;
        Ok(Self { timestamp, v1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test_secret";
    const PAYLOAD: &[u8] = br#"{"id":"evt_1","type":"checkout.session.completed","data":{}}"#;
    const NOW: i64 = 1_700_000_000;

    fn header(timestamp: i64) -> String {
        let sig = compute_signature(SECRET, timestamp, PAYLOAD).unwrap();
        format!("t={timestamp},v1={sig}")
    }

    #[test]
    fn accepts_valid_signature() {
        let t = verify_signature(PAYLOAD, &header(NOW), SECRET, NOW, DEFAULT_TOLERANCE_SECS);
        assert_eq!(t, Ok(NOW));
    }

    #[test]
    fn accepts_any_matching_v1_among_several() {
        let good = compute_signature(SECRET, NOW, PAYLOAD).unwrap();
        let header = format!("t={NOW},v1={},v0=legacy,v1={good}", "00".repeat(32));
        assert!(verify_signature(PAYLOAD, &header, SECRET, NOW, 300).is_ok());
    }

    #[test]
    fn rejects_tampered_payload() {
        let err = verify_signature(b"{}", &header(NOW), SECRET, NOW, 300).unwrap_err();
        assert_eq!(err, BillingError::SignatureMismatch);
    }

    #[test]
    fn rejects_wrong_secret() {
        let err = verify_signature(PAYLOAD, &header(NOW), "whsec_other", NOW, 300).unwrap_err();
        assert_eq!(err, BillingError::SignatureMismatch);
    }

    #[test]
    fn rejects_stale_delivery() {
        let stale = NOW - 301;
        let err = verify_signature(PAYLOAD, &header(stale), SECRET, NOW, 300).unwrap_err();
        assert_eq!(
            err,
            BillingError::TimestampOutOfTolerance {
                timestamp: stale,
                tolerance: 300
            }
        );
    }

    #[test]
    fn rejects_malformed_headers() {
        assert!(matches!(
            verify_signature(PAYLOAD, "garbage", SECRET, NOW, 300),
            Err(BillingError::MalformedHeader(_))
        ));
        assert!(matches!(
            verify_signature(PAYLOAD, "v1=abcd", SECRET, NOW, 300),
            Err(BillingError::MalformedHeader(_))
        ));
        assert_eq!(
            verify_signature(PAYLOAD, &format!("t={NOW}"), SECRET, NOW, 300),
            Err(BillingError::MissingSignature)
        );
    }

    #[test]
    fn requires_a_secret() {
        assert_eq!(
            verify_signature(PAYLOAD, &header(NOW), "", NOW, 300),
            Err(BillingError::MissingSecret)
        );
    }

    #[test]
    fn construct_event_parses_envelope() {
        let event = construct_event(PAYLOAD, &header(NOW), SECRET, NOW).unwrap();
        assert_eq!(event.id, "evt_1");
        assert_eq!(event.event_type, "checkout.session.completed");
    }
}
