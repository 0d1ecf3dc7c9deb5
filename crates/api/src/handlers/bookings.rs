//! Handlers for the caller's own bookings.

use axum::extract::State;
use axum::Json;
use parkbook_db::models::booking::UserBooking;
use parkbook_db::repositories::BookingRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/bookings
///
/// The caller's bookings, newest first, with program/park/payment details.
/// A booking whose payment record is missing still appears: reconciliation
/// acknowledges completed checkouts even when the payment insert failed.
pub async fn list_my_bookings(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<UserBooking>>>> {
    let bookings = BookingRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: bookings }))
}
