//! Stripe webhook signature verification.
//!
//! Stripe signs each delivery with `Stripe-Signature: t=<unix>,v1=<hex>`,
//! where `v1` is HMAC-SHA256 over `"{t}.{raw_body}"` keyed with the endpoint
//! secret. Verification must use the raw, undecoded request body -- a
//! re-serialized form will not match.
//!
//! Comparison goes through [`Mac::verify_slice`], which is constant-time.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Maximum accepted age of a signed payload, in seconds.
///
/// Matches Stripe's documented default tolerance; older timestamps are
/// rejected to limit replay of captured deliveries.
pub const SIGNATURE_TOLERANCE_SECS: i64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("Malformed signature header")]
    Malformed,

    #[error("Signature timestamp outside tolerance")]
    Expired,

    #[error("Signature does not match payload")]
    Mismatch,
}

/// Verify a `Stripe-Signature` header against the raw request body.
///
/// `now_unix` is injected so expiry behaviour is testable; callers pass
/// `chrono::Utc::now().timestamp()`.
pub fn verify_signature(
    payload: &[u8],
    header: &str,
    secret: &str,
    now_unix: i64,
) -> Result<(), SignatureError> {
    let (timestamp, candidates) = parse_header(header)?;

    if (now_unix - timestamp).abs() > SIGNATURE_TOLERANCE_SECS {
        return Err(SignatureError::Expired);
    }

    for candidate in candidates {
        let Some(sig_bytes) = decode_hex(candidate) else {
            continue;
        };
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);
        if mac.verify_slice(&sig_bytes).is_ok() {
            return Ok(());
        }
    }

    Err(SignatureError::Mismatch)
}

/// Split the header into its timestamp and the `v1` signature candidates.
///
/// Stripe may send multiple `v1` entries during secret rotation; any one
/// matching is sufficient.
fn parse_header(header: &str) -> Result<(i64, Vec<&str>), SignatureError> {
    let mut timestamp: Option<i64> = None;
    let mut candidates = Vec::new();

    for part in header.split(',') {
        match part.trim().split_once('=') {
            Some(("t", value)) => {
                timestamp = Some(value.parse().map_err(|_| SignatureError::Malformed)?);
            }
            Some(("v1", value)) => candidates.push(value),
            _ => {} // unknown schemes (e.g. v0) are ignored
        }
    }

    let timestamp = timestamp.ok_or(SignatureError::Malformed)?;
    if candidates.is_empty() {
        return Err(SignatureError::Malformed);
    }
    Ok((timestamp, candidates))
}

/// Decode a lowercase/uppercase hex string; `None` on any invalid input.
fn decode_hex(input: &str) -> Option<Vec<u8>> {
    if input.len() % 2 != 0 {
        return None;
    }
    (0..input.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&input[i..i + 2], 16).ok())
        .collect()
}

/// Compute the hex-encoded `v1` signature for a payload.
///
/// Used by tests to construct valid headers; kept here so the signing and
/// verifying sides share one definition of the signed message.
pub fn sign_payload(payload: &[u8], secret: &str, timestamp: i64) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    encode_hex(&mac.finalize().into_bytes())
}

fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test_secret";
    const BODY: &[u8] = br#"{"type":"checkout.session.completed"}"#;

    fn header_for(body: &[u8], secret: &str, timestamp: i64) -> String {
        format!("t={},v1={}", timestamp, sign_payload(body, secret, timestamp))
    }

    #[test]
    fn valid_signature_is_accepted() {
        let now = 1_700_000_000;
        let header = header_for(BODY, SECRET, now);
        assert_eq!(verify_signature(BODY, &header, SECRET, now), Ok(()));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let now = 1_700_000_000;
        let header = header_for(BODY, "whsec_other", now);
        assert_eq!(
            verify_signature(BODY, &header, SECRET, now),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn tampered_body_is_rejected() {
        let now = 1_700_000_000;
        let header = header_for(BODY, SECRET, now);
        let tampered = br#"{"type":"checkout.session.completed","extra":1}"#;
        assert_eq!(
            verify_signature(tampered, &header, SECRET, now),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn stale_timestamp_is_rejected() {
        let signed_at = 1_700_000_000;
        let header = header_for(BODY, SECRET, signed_at);
        let now = signed_at + SIGNATURE_TOLERANCE_SECS + 1;
        assert_eq!(
            verify_signature(BODY, &header, SECRET, now),
            Err(SignatureError::Expired)
        );
    }

    #[test]
    fn timestamp_within_tolerance_is_accepted() {
        let signed_at = 1_700_000_000;
        let header = header_for(BODY, SECRET, signed_at);
        let now = signed_at + SIGNATURE_TOLERANCE_SECS;
        assert_eq!(verify_signature(BODY, &header, SECRET, now), Ok(()));
    }

    #[test]
    fn malformed_headers_are_rejected() {
        let now = 1_700_000_000;
        for header in [
            "",
            "v1=abcd",                 // missing timestamp
            "t=1700000000",            // missing signature
            "t=notanumber,v1=abcd",    // bad timestamp
            "t=1700000000;v1=abcd",    // wrong separator
        ] {
            assert_eq!(
                verify_signature(BODY, header, SECRET, now),
                Err(SignatureError::Malformed),
                "header {header:?} should be malformed",
            );
        }
    }

    #[test]
    fn rotated_secret_second_candidate_matches() {
        let now = 1_700_000_000;
        let good = sign_payload(BODY, SECRET, now);
        let bad = sign_payload(BODY, "whsec_old", now);
        let header = format!("t={now},v1={bad},v1={good}");
        assert_eq!(verify_signature(BODY, &header, SECRET, now), Ok(()));
    }
}
