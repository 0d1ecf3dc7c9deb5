//! Public program browsing handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use parkbook_core::capacity;
use parkbook_core::error::CoreError;
use parkbook_core::types::DbId;
use parkbook_db::models::event::{EventFilters, EventSummary};
use parkbook_db::repositories::EventRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the public program listing.
#[derive(Debug, Deserialize)]
pub struct EventListParams {
    pub category_id: Option<DbId>,
    pub park_id: Option<DbId>,
    pub level: Option<String>,
    pub date_from: Option<NaiveDate>,
}

/// A program detail with derived seat availability figures.
#[derive(Debug, Serialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: EventSummary,
    pub remaining_seats: i32,
    pub is_full: bool,
    pub is_almost_full: bool,
}

/// GET /api/v1/events
///
/// Upcoming open programs matching the search filters.
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<EventListParams>,
) -> AppResult<Json<DataResponse<Vec<EventSummary>>>> {
    let filters = EventFilters {
        category_id: params.category_id,
        park_id: params.park_id,
        level: params.level,
        date_from: params.date_from,
    };
    let today = Utc::now().date_naive();
    let events = EventRepo::list_upcoming(&state.pool, &filters, today).await?;
    Ok(Json(DataResponse { data: events }))
}

/// GET /api/v1/events/{id}
///
/// Program detail including remaining seats and the almost-full flag
/// (3 seats or fewer remaining).
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<EventDetail>>> {
    let event = EventRepo::find_summary(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Event", id })?;

    let detail = EventDetail {
        remaining_seats: capacity::remaining_seats(event.capacity, event.current_count),
        is_full: capacity::is_full(event.capacity, event.current_count),
        is_almost_full: capacity::is_almost_full(event.capacity, event.current_count),
        event,
    };
    Ok(Json(DataResponse { data: detail }))
}
