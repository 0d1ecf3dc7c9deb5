//! Route definitions for the `/admin` resource (admin role required).

use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::handlers::{admin_bookings, admin_events, admin_payments};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST  /events                     -> create program
/// PUT   /events/{id}                -> update program fields
/// PATCH /events/{id}/status         -> open/close/cancel program
/// GET   /events/{id}/participants   -> confirmed participants
/// GET   /bookings                   -> booking search
/// GET   /payments                   -> payment review list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", post(admin_events::create_event))
        .route("/events/{id}", put(admin_events::update_event))
        .route("/events/{id}/status", patch(admin_events::update_event_status))
        .route(
            "/events/{id}/participants",
            get(admin_events::list_participants),
        )
        .route("/bookings", get(admin_bookings::search_bookings))
        .route("/payments", get(admin_payments::list_payments))
}
