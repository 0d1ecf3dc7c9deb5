//! Lookup lists backing the program search filters.

use axum::extract::State;
use axum::Json;
use parkbook_db::models::category::EventCategory;
use parkbook_db::models::park::Park;
use parkbook_db::repositories::{CategoryRepo, ParkRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/parks
pub async fn list_parks(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Park>>>> {
    let parks = ParkRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: parks }))
}

/// GET /api/v1/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<EventCategory>>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}
