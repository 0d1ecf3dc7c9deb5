//! Admin booking search.

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use parkbook_core::search::{clamp_limit, clamp_offset, ilike_pattern, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use parkbook_core::types::DbId;
use parkbook_db::models::booking::{AdminBooking, BookingFilters};
use parkbook_db::repositories::BookingRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /admin/bookings`.
#[derive(Debug, Deserialize)]
pub struct BookingSearchParams {
    /// Free-text match against nickname, phone, or program title.
    pub q: Option<String>,
    pub park_id: Option<DbId>,
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/v1/admin/bookings
///
/// Search all bookings with profile, program, and payment context.
pub async fn search_bookings(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<BookingSearchParams>,
) -> AppResult<Json<DataResponse<Vec<AdminBooking>>>> {
    let filters = BookingFilters {
        query: params.q.as_deref().and_then(ilike_pattern),
        park_id: params.park_id,
        date: params.date,
        status: params.status,
    };

    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);

    let bookings = BookingRepo::search(&state.pool, &filters, limit, offset).await?;
    Ok(Json(DataResponse { data: bookings }))
}
