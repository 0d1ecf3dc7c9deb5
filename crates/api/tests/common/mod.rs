//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use parkbook_api::auth::jwt::{generate_access_token, JwtConfig};
use parkbook_api::config::{ServerConfig, StripeConfig};
use parkbook_api::payments::stripe::StripeClient;
use parkbook_api::router::build_app_router;
use parkbook_api::state::AppState;
use parkbook_core::types::DbId;

/// Build a test `ServerConfig` with safe defaults.
///
/// The Stripe API base points at an unroutable local port so a test that
/// accidentally reaches the network fails fast, and webhook signature
/// verification is off (no endpoint secret).
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 60,
        },
        stripe: StripeConfig {
            secret_key: "sk_test_dummy".to_string(),
            webhook_secret: None,
            api_base: "http://127.0.0.1:1".to_string(),
            currency: "jpy".to_string(),
            frontend_origin: "http://localhost:3001".to_string(),
        },
    }
}

/// Like [`test_config`], but with webhook signature verification enabled.
pub fn test_config_with_webhook_secret(secret: &str) -> ServerConfig {
    let mut config = test_config();
    config.stripe.webhook_secret = Some(secret.to_string());
    config
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through the same [`build_app_router`] as `main.rs`, so tests
/// exercise the production middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery).
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Build the application router with a caller-supplied configuration.
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let stripe = Arc::new(StripeClient::new(&config.stripe));
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        stripe,
    };
    build_app_router(state, &config)
}

/// Mint an access token for the given user, signed with the test secret.
pub fn token_for(user_id: DbId, role: &str) -> String {
    let config = test_config();
    generate_access_token(user_id, role, &config.jwt).expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PATCH")
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a raw byte payload with arbitrary extra headers. Used for webhook
/// deliveries where the body must reach the handler byte-for-byte.
pub async fn post_raw(
    app: Router,
    uri: &str,
    headers: &[(&str, &str)],
    body: Vec<u8>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::from(body)).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

pub async fn seed_park(pool: &PgPool, name: &str) -> DbId {
    sqlx::query_scalar("INSERT INTO parks (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("park insert should succeed")
}

pub async fn seed_category(pool: &PgPool, name: &str) -> DbId {
    sqlx::query_scalar("INSERT INTO event_categories (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("category insert should succeed")
}

/// Insert an open program on a future date and return its id.
pub async fn seed_event(pool: &PgPool, park_id: DbId, category_id: DbId, capacity: i32) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO events \
            (park_id, category_id, title, date, start_time, end_time, price, capacity) \
         VALUES ($1, $2, 'Test Program', '2030-06-01', '09:00', '10:30', 1500, $3) \
         RETURNING id",
    )
    .bind(park_id)
    .bind(category_id)
    .bind(capacity)
    .fetch_one(pool)
    .await
    .expect("event insert should succeed")
}

/// Insert a profile with a known password hash and return its id.
pub async fn seed_profile(pool: &PgPool, email: &str, role: &str) -> DbId {
    let hash = parkbook_api::auth::password::hash_password("correct horse battery")
        .expect("hashing should succeed");
    sqlx::query_scalar(
        "INSERT INTO profiles (email, password_hash, nickname, phone, role) \
         VALUES ($1, $2, 'Tester', '090-0000-0000', $3) RETURNING id",
    )
    .bind(email)
    .bind(hash)
    .bind(role)
    .fetch_one(pool)
    .await
    .expect("profile insert should succeed")
}
