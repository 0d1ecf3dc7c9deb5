//! Repository for the `parks` table.

use parkbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::park::Park;

const PARK_COLUMNS: &str = "id, name, address, area, prefecture, nearest_station, has_shower, \
     has_parking, image_url, created_at";

pub struct ParkRepo;

impl ParkRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Park>, sqlx::Error> {
        let query = format!("SELECT {PARK_COLUMNS} FROM parks ORDER BY name");
        sqlx::query_as::<_, Park>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Park>, sqlx::Error> {
        let query = format!("SELECT {PARK_COLUMNS} FROM parks WHERE id = $1");
        sqlx::query_as::<_, Park>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
