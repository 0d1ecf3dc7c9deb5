//! Program (bookable session) entity models.
//!
//! The table is named `events` after the original schema; one row is a single
//! bookable program instance at a park. `current_count` is the capacity
//! ledger -- it is mutated only by webhook reconciliation.

use chrono::{NaiveDate, NaiveTime};
use parkbook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub park_id: DbId,
    pub category_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Price in the currency's minor unit (JPY: yen).
    pub price: i64,
    pub capacity: i32,
    pub current_count: i32,
    pub status: String,
    pub level: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An event joined with its park and category names, for list/detail views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventSummary {
    pub id: DbId,
    pub park_id: DbId,
    pub category_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub price: i64,
    pub capacity: i32,
    pub current_count: i32,
    pub status: String,
    pub level: Option<String>,
    pub park_name: String,
    pub category_name: String,
}

/// Input for `EventRepo::create`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub park_id: DbId,
    pub category_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub price: i64,
    pub capacity: i32,
    pub level: Option<String>,
}

/// Input for `EventRepo::update`. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEvent {
    pub park_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub price: Option<i64>,
    pub capacity: Option<i32>,
    pub level: Option<String>,
}

/// Filters for the public program listing.
#[derive(Debug, Clone, Default)]
pub struct EventFilters {
    pub category_id: Option<DbId>,
    pub park_id: Option<DbId>,
    pub level: Option<String>,
    pub date_from: Option<NaiveDate>,
}
