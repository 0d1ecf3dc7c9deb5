//! Repository for the `event_categories` lookup table.

use sqlx::PgPool;

use crate::models::category::EventCategory;

pub struct CategoryRepo;

impl CategoryRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<EventCategory>, sqlx::Error> {
        sqlx::query_as::<_, EventCategory>(
            "SELECT id, name, description, sort_order \
             FROM event_categories ORDER BY sort_order, name",
        )
        .fetch_all(pool)
        .await
    }
}
