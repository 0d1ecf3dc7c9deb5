//! Program category entity model.

use parkbook_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `event_categories` lookup table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventCategory {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub sort_order: i32,
}
