//! HTTP-level integration tests for checkout initiation.
//!
//! The availability checks here are advisory pre-checks; the tests assert
//! that each denial reason surfaces with its stable error code and that no
//! local state is written by this endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, post_json_auth, seed_category, seed_event, seed_park, seed_profile};
use parkbook_core::roles::ROLE_USER;
use parkbook_core::types::DbId;
use sqlx::PgPool;

const CHECKOUT_URI: &str = "/api/v1/checkout";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_scenario(pool: &PgPool, capacity: i32) -> (DbId, DbId) {
    let park_id = seed_park(pool, "Central Park").await;
    let category_id = seed_category(pool, "Tennis").await;
    let event_id = seed_event(pool, park_id, category_id, capacity).await;
    let user_id = seed_profile(pool, "booker@test.com", ROLE_USER).await;
    (event_id, user_id)
}

fn checkout_body(event_id: DbId) -> serde_json::Value {
    serde_json::json!({ "event_id": event_id })
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checkout_requires_auth(pool: PgPool) {
    let (event_id, _user_id) = seed_scenario(&pool, 5).await;
    let app = common::build_test_app(pool);

    let response = post_json(app, CHECKOUT_URI, checkout_body(event_id)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Availability denials
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checkout_unknown_event_is_404(pool: PgPool) {
    let (_event_id, user_id) = seed_scenario(&pool, 5).await;
    let token = common::token_for(user_id, ROLE_USER);
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        CHECKOUT_URI,
        &token,
        checkout_body(uuid::Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checkout_closed_event_is_denied(pool: PgPool) {
    let (event_id, user_id) = seed_scenario(&pool, 5).await;
    sqlx::query("UPDATE events SET status = 'closed' WHERE id = $1")
        .bind(event_id)
        .execute(&pool)
        .await
        .unwrap();

    let token = common::token_for(user_id, ROLE_USER);
    let app = common::build_test_app(pool);

    let response = post_json_auth(app, CHECKOUT_URI, &token, checkout_body(event_id)).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_ACCEPTING_BOOKINGS");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checkout_full_event_is_denied(pool: PgPool) {
    let (event_id, user_id) = seed_scenario(&pool, 1).await;
    sqlx::query("UPDATE events SET current_count = capacity WHERE id = $1")
        .bind(event_id)
        .execute(&pool)
        .await
        .unwrap();

    let token = common::token_for(user_id, ROLE_USER);
    let app = common::build_test_app(pool);

    let response = post_json_auth(app, CHECKOUT_URI, &token, checkout_body(event_id)).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FULL");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checkout_already_booked_is_denied(pool: PgPool) {
    let (event_id, user_id) = seed_scenario(&pool, 5).await;
    sqlx::query("INSERT INTO bookings (user_id, event_id, status) VALUES ($1, $2, 'confirmed')")
        .bind(user_id)
        .bind(event_id)
        .execute(&pool)
        .await
        .unwrap();

    let token = common::token_for(user_id, ROLE_USER);
    let app = common::build_test_app(pool.clone());

    let response = post_json_auth(app, CHECKOUT_URI, &token, checkout_body(event_id)).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "ALREADY_BOOKED");

    // A cancelled booking does not block a new checkout attempt.
    sqlx::query("UPDATE bookings SET status = 'cancelled' WHERE user_id = $1")
        .bind(user_id)
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = post_json_auth(app, CHECKOUT_URI, &token, checkout_body(event_id)).await;
    // Passes the denials and reaches the (unreachable) payment provider.
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

// ---------------------------------------------------------------------------
// Provider failure
// ---------------------------------------------------------------------------

/// When every availability check passes but Stripe cannot be reached, the
/// caller gets a 502 and nothing is written locally.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_provider_failure_is_502_and_writes_nothing(pool: PgPool) {
    let (event_id, user_id) = seed_scenario(&pool, 5).await;
    let token = common::token_for(user_id, ROLE_USER);
    let app = common::build_test_app(pool.clone());

    let response = post_json_auth(app, CHECKOUT_URI, &token, checkout_body(event_id)).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "PAYMENT_PROVIDER_ERROR");

    let bookings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(bookings, 0);

    let count: i32 = sqlx::query_scalar("SELECT current_count FROM events WHERE id = $1")
        .bind(event_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
