pub mod admin;
pub mod auth;
pub mod bookings;
pub mod events;
pub mod health;
pub mod lookups;
pub mod webhooks;

use axum::routing::post;
use axum::Router;

use crate::handlers::checkout;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/me                             get, update profile (requires auth)
///
/// /parks                               list parks (public)
/// /categories                          list program categories (public)
///
/// /events                              list upcoming programs (public)
/// /events/{id}                         program detail with seat info (public)
///
/// /checkout                            start Stripe checkout (requires auth)
///
/// /bookings                            caller's bookings (requires auth)
///
/// /webhooks/stripe                     Stripe event delivery (signature-verified)
///
/// /admin/events                        create program (admin only)
/// /admin/events/{id}                   update program
/// /admin/events/{id}/status            open/close/cancel program
/// /admin/events/{id}/participants      confirmed participants
/// /admin/bookings                      booking search
/// /admin/payments                      payment review list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication and profile.
        .nest("/auth", auth::router())
        // Public lookup tables (parks, categories).
        .merge(lookups::router())
        // Program listing and detail.
        .nest("/events", events::router())
        // Checkout initiation (availability checks + Stripe session).
        .route("/checkout", post(checkout::create_checkout))
        // The caller's own bookings.
        .nest("/bookings", bookings::router())
        // Stripe webhook delivery.
        .nest("/webhooks", webhooks::router())
        // Admin: program management, booking search, payment review.
        .nest("/admin", admin::router())
}
