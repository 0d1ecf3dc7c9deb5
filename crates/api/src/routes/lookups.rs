//! Route definitions for public lookup tables.

use axum::routing::get;
use axum::Router;

use crate::handlers::lookups;
use crate::state::AppState;

/// Routes for `/parks` and `/categories` (public, read-only).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/parks", get(lookups::list_parks))
        .route("/categories", get(lookups::list_categories))
}
