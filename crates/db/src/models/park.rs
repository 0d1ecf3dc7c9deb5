//! Park (venue) entity model.

use parkbook_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `parks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Park {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub area: Option<String>,
    pub prefecture: Option<String>,
    pub nearest_station: Option<String>,
    pub has_shower: bool,
    pub has_parking: bool,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}
