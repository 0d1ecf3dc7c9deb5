//! Admin payment review list.

use axum::extract::{Query, State};
use axum::Json;
use parkbook_core::search::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use parkbook_db::models::payment::AdminPayment;
use parkbook_db::repositories::PaymentRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/payments
///
/// Captured payments newest first, with booking, program, and payer
/// context.
pub async fn list_payments(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<AdminPayment>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);

    let payments = PaymentRepo::list_admin(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: payments }))
}
