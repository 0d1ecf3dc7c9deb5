//! HTTP-level integration tests for registration, login, and profile
//! endpoints, plus role enforcement on the admin surface.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, put_json_auth};
use parkbook_core::roles::{ROLE_ADMIN, ROLE_USER};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_creates_user_profile(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "new@test.com",
        "password": "long enough password",
        "nickname": "Newbie"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["access_token"].is_string());
    assert_eq!(json["data"]["user"]["email"], "new@test.com");
    assert_eq!(json["data"]["user"]["nickname"], "Newbie");
    // Registration never grants admin.
    assert_eq!(json["data"]["user"]["role"], "user");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_duplicate_email_conflicts(pool: PgPool) {
    common::seed_profile(&pool, "taken@test.com", ROLE_USER).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "taken@test.com",
        "password": "long enough password"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_rejects_weak_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "weak@test.com",
        "password": "short"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_rejects_invalid_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "not-an-email",
        "password": "long enough password"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success_returns_token(pool: PgPool) {
    let user_id = common::seed_profile(&pool, "login@test.com", ROLE_USER).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "login@test.com",
        "password": "correct horse battery"
    });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["access_token"].is_string());
    assert_eq!(json["data"]["user"]["id"], user_id.to_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password_is_401(pool: PgPool) {
    common::seed_profile(&pool, "login@test.com", ROLE_USER).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "login@test.com",
        "password": "incorrect"
    });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_email_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "ghost@test.com",
        "password": "whatever password"
    });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_profile_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_profile_returns_caller(pool: PgPool) {
    let user_id = common::seed_profile(&pool, "me@test.com", ROLE_USER).await;
    let token = common::token_for(user_id, ROLE_USER);
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "me@test.com");
    // The password hash must never appear in any projection.
    assert!(json["data"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile_is_partial(pool: PgPool) {
    let user_id = common::seed_profile(&pool, "me@test.com", ROLE_USER).await;
    let token = common::token_for(user_id, ROLE_USER);
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "nickname": "Renamed" });
    let response = put_json_auth(app, "/api/v1/auth/me", &token, body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["nickname"], "Renamed");
    // Fields not in the request are unchanged.
    assert_eq!(json["data"]["phone"], "090-0000-0000");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_garbage_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/auth/me", "not.a.jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Role enforcement
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_routes_reject_user_role(pool: PgPool) {
    let user_id = common::seed_profile(&pool, "plain@test.com", ROLE_USER).await;
    let token = common::token_for(user_id, ROLE_USER);
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/admin/bookings", &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_routes_reject_missing_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/admin/bookings").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_routes_accept_admin_role(pool: PgPool) {
    let admin_id = common::seed_profile(&pool, "admin@test.com", ROLE_ADMIN).await;
    let token = common::token_for(admin_id, ROLE_ADMIN);
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/admin/bookings", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}
