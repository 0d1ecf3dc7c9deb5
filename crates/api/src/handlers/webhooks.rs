//! Stripe webhook handler: payment-completion reconciliation.
//!
//! This is the authoritative write path for bookings. The browser redirect
//! after checkout proves nothing; only the signed webhook delivery turns a
//! captured payment into a confirmed seat.
//!
//! Response status drives Stripe's redelivery behaviour:
//! - 2xx: handled or intentionally ignored, do not redeliver.
//! - 4xx: signature/validation failure, redelivery will not help.
//! - 5xx: transient failure, redeliver.
//!
//! Once the booking row exists, later step failures (payment record,
//! capacity counter) are logged and the delivery is still acknowledged:
//! the booking is the authoritative evidence of entitlement, and losing
//! one is worse than leaving secondary bookkeeping to out-of-band repair.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use parkbook_core::signature::{verify_signature, SignatureError};
use parkbook_core::types::DbId;
use parkbook_db::repositories::{BookingRepo, EventRepo, PaymentRepo};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::payments::webhook_event::{WebhookEvent, CHECKOUT_COMPLETED, PAYMENT_SUCCEEDED};
use crate::state::AppState;

/// POST /api/v1/webhooks/stripe
///
/// Receives raw body bytes: signature verification must run over the exact
/// payload Stripe signed, not a re-serialized form.
pub async fn stripe_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    // 1. Authenticity. Skipped when no endpoint secret is provisioned
    //    (local development posture).
    match &state.config.stripe.webhook_secret {
        Some(secret) => {
            let signature = headers
                .get("stripe-signature")
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| {
                    AppError::BadRequest("Missing Stripe-Signature header".into())
                })?;

            verify_signature(&body, signature, secret, Utc::now().timestamp()).map_err(
                |err| {
                    tracing::warn!(error = %err, "Webhook signature verification failed");
                    AppError::BadRequest(match err {
                        SignatureError::Malformed => "Malformed Stripe-Signature header".into(),
                        SignatureError::Expired => "Stripe-Signature timestamp expired".into(),
                        SignatureError::Mismatch => {
                            "Webhook signature verification failed".into()
                        }
                    })
                },
            )?;
        }
        None => {
            tracing::warn!("Webhook signature verification skipped: no secret configured");
        }
    }

    let event: WebhookEvent = serde_json::from_slice(&body)
        .map_err(|_| AppError::BadRequest("Invalid webhook payload".into()))?;

    tracing::info!(event_id = %event.id, kind = %event.kind, "Received Stripe webhook event");

    // 2. Event-type filter. Only a completed checkout reconciles;
    //    payment_intent.succeeded is a backup signal for the same
    //    transaction and must not trigger a second reconciliation.
    match event.kind.as_str() {
        CHECKOUT_COMPLETED => reconcile_checkout(&state, &event).await,
        PAYMENT_SUCCEEDED => {
            tracing::info!(
                payment_intent = %event.data.object.id,
                "Payment intent succeeded (backup signal, no reconciliation)",
            );
            Ok(Json(json!({ "received": true })))
        }
        other => {
            tracing::debug!(kind = %other, "Ignoring unhandled webhook event kind");
            Ok(Json(json!({ "received": true })))
        }
    }
}

/// Reconcile a completed checkout: booking, payment record, capacity ledger.
async fn reconcile_checkout(
    state: &AppState,
    event: &WebhookEvent,
) -> AppResult<Json<serde_json::Value>> {
    let object = &event.data.object;

    // 3. Correlation metadata set by the checkout initiator. Absence means
    //    a correlation bug, not a transient fault: acknowledge with 400 so
    //    Stripe stops redelivering, but log at error level.
    let (event_id, user_id) = match parse_metadata(object.metadata.get("event_id"), object.metadata.get("user_id")) {
        Some(ids) => ids,
        None => {
            tracing::error!(
                stripe_event = %event.id,
                checkout_session = %object.id,
                "Webhook metadata missing or malformed (event_id/user_id)",
            );
            return Err(AppError::BadRequest("Missing required metadata".into()));
        }
    };

    // 4. Idempotency: a confirmed booking for this (user, program) pair
    //    means this delivery is a duplicate. Acknowledge and write nothing.
    if let Some(existing) =
        BookingRepo::find_confirmed(&state.pool, user_id, event_id).await?
    {
        tracing::info!(
            booking_id = %existing.id,
            user_id = %user_id,
            event_id = %event_id,
            "Duplicate webhook delivery: booking already exists",
        );
        return Ok(Json(json!({ "received": true, "message": "Booking already exists" })));
    }

    // 5. Booking creation. The partial unique index closes the window where
    //    two concurrent deliveries both passed the check above: the second
    //    insert conflicts and comes back None. A real database failure maps
    //    to 500 so Stripe redelivers.
    let booking = match BookingRepo::create_confirmed(&state.pool, user_id, event_id).await? {
        Some(booking) => booking,
        None => {
            tracing::info!(
                user_id = %user_id,
                event_id = %event_id,
                "Concurrent duplicate delivery lost the booking insert race",
            );
            return Ok(Json(json!({ "received": true, "message": "Booking already exists" })));
        }
    };

    tracing::info!(booking_id = %booking.id, user_id = %user_id, event_id = %event_id, "Booking created");

    // 6. Payment record. Failure is logged but the delivery is still
    //    acknowledged; the booking above is the entitlement.
    let amount = object.amount_total.unwrap_or(0);
    match PaymentRepo::create_succeeded(
        &state.pool,
        booking.id,
        object.transaction_id(),
        amount,
        Utc::now(),
    )
    .await
    {
        Ok(payment) => {
            tracing::info!(payment_id = %payment.id, booking_id = %booking.id, "Payment record created");
        }
        Err(err) => {
            tracing::error!(
                error = %err,
                booking_id = %booking.id,
                "Failed to create payment record; booking stands, repair out of band",
            );
        }
    }

    // 7. Capacity ledger. The conditional update increments only below
    //    capacity; hitting the ceiling here means the program oversold
    //    between checkout and payment completion.
    match EventRepo::increment_count(&state.pool, event_id).await {
        Ok(true) => {
            tracing::info!(event_id = %event_id, "Capacity count incremented");
        }
        Ok(false) => {
            tracing::error!(
                event_id = %event_id,
                booking_id = %booking.id,
                "Capacity count not incremented: program at capacity or missing",
            );
        }
        Err(err) => {
            tracing::error!(error = %err, event_id = %event_id, "Failed to increment capacity count");
        }
    }

    Ok(Json(json!({ "received": true })))
}

fn parse_metadata(event_id: Option<&String>, user_id: Option<&String>) -> Option<(DbId, DbId)> {
    let event_id = event_id?.parse().ok()?;
    let user_id = user_id?.parse().ok()?;
    Some((event_id, user_id))
}
