//! Checkout initiation: availability checks + hosted payment session.

use axum::extract::State;
use axum::Json;
use parkbook_core::booking::{check_bookable, BookingDenial};
use parkbook_core::error::CoreError;
use parkbook_core::types::DbId;
use parkbook_db::repositories::{BookingRepo, EventRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::payments::stripe::CheckoutSessionParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /checkout`.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub event_id: DbId,
}

/// Response payload: the Stripe-issued redirect URL.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub url: String,
}

/// POST /api/v1/checkout
///
/// Validates availability, then opens a hosted checkout session on Stripe
/// and returns its redirect URL. No local state is written here.
///
/// The checks are advisory: capacity is only authoritatively enforced by
/// the conditional ledger update during webhook reconciliation, so two
/// users can both pass the Full check and race to pay for the last seat.
pub async fn create_checkout(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CheckoutRequest>,
) -> AppResult<Json<DataResponse<CheckoutResponse>>> {
    let event = EventRepo::find_summary(&state.pool, input.event_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Event",
            id: input.event_id,
        })?;

    check_bookable(&event.status, event.current_count, event.capacity)?;

    if BookingRepo::find_confirmed(&state.pool, user.user_id, event.id)
        .await?
        .is_some()
    {
        return Err(BookingDenial::AlreadyBooked.into());
    }

    let origin = &state.config.stripe.frontend_origin;
    let session = state
        .stripe
        .create_checkout_session(&CheckoutSessionParams {
            currency: state.config.stripe.currency.clone(),
            unit_amount: event.price,
            product_name: event.title.clone(),
            product_description: format!(
                "{} - {} {}~{}",
                event.park_name,
                event.date,
                event.start_time.format("%H:%M"),
                event.end_time.format("%H:%M"),
            ),
            success_url: format!(
                "{origin}/programs/{}/complete?session_id={{CHECKOUT_SESSION_ID}}",
                event.id
            ),
            cancel_url: format!("{origin}/programs/{}/checkout", event.id),
            event_id: event.id.to_string(),
            user_id: user.user_id.to_string(),
        })
        .await?;

    tracing::info!(
        user_id = %user.user_id,
        event_id = %event.id,
        checkout_session = %session.id,
        "Checkout session created",
    );

    Ok(Json(DataResponse {
        data: CheckoutResponse { url: session.url },
    }))
}
