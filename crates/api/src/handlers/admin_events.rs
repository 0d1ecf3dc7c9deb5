//! Admin handlers for program management.
//!
//! All endpoints require the admin role via [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use parkbook_core::error::CoreError;
use parkbook_core::status;
use parkbook_core::types::DbId;
use parkbook_db::models::booking::Participant;
use parkbook_db::models::event::{CreateEvent, UpdateEvent};
use parkbook_db::repositories::{BookingRepo, EventRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/admin/events
///
/// Create a new program. `current_count` starts at zero and is only ever
/// mutated by webhook reconciliation.
pub async fn create_event(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".into(),
        )));
    }
    if input.capacity <= 0 {
        return Err(AppError::Core(CoreError::Validation(
            "capacity must be positive".into(),
        )));
    }
    if input.price < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "price must not be negative".into(),
        )));
    }
    if input.end_time <= input.start_time {
        return Err(AppError::Core(CoreError::Validation(
            "end_time must be after start_time".into(),
        )));
    }

    let event = EventRepo::create(&state.pool, &input).await?;

    tracing::info!(event_id = %event.id, user_id = %admin.user_id, "Program created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// PUT /api/v1/admin/events/{id}
///
/// Partial update of a program's fields (not its status or ledger).
pub async fn update_event(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<impl IntoResponse> {
    if let Some(capacity) = input.capacity {
        if capacity <= 0 {
            return Err(AppError::Core(CoreError::Validation(
                "capacity must be positive".into(),
            )));
        }
    }

    let updated = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Event", id })?;

    tracing::info!(event_id = %id, user_id = %admin.user_id, "Program updated");

    Ok(Json(DataResponse { data: updated }))
}

/// Request body for `PATCH /admin/events/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// PATCH /api/v1/admin/events/{id}/status
///
/// Move a program between open/closed/cancelled. Capacity never changes
/// status automatically; this is the only status mutation path.
pub async fn update_event_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<impl IntoResponse> {
    if !status::event::is_valid(&input.status) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid status: {}",
            input.status
        ))));
    }

    let updated = EventRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(CoreError::NotFound { entity: "Event", id })?;

    tracing::info!(
        event_id = %id,
        status = %input.status,
        user_id = %admin.user_id,
        "Program status updated",
    );

    Ok(Json(DataResponse { data: updated }))
}

/// GET /api/v1/admin/events/{id}/participants
///
/// Confirmed participants of one program. Profiles and payments are
/// optional in the projection; a missing row must not hide the booking.
pub async fn list_participants(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Participant>>>> {
    EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Event", id })?;

    let participants = BookingRepo::participants(&state.pool, id).await?;
    Ok(Json(DataResponse { data: participants }))
}
