//! Route definitions for the `/bookings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// GET /  -> caller's bookings, newest first (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(bookings::list_my_bookings))
}
