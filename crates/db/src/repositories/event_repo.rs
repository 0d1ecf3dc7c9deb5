//! Repository for the `events` table, including the capacity ledger.

use chrono::NaiveDate;
use parkbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, EventFilters, EventSummary, UpdateEvent};

/// Column list for `events` queries.
const EVENT_COLUMNS: &str = "id, park_id, category_id, title, description, date, start_time, \
     end_time, price, capacity, current_count, status, level, created_at, updated_at";

/// Column list for joined summary queries (aliased to the `e` table).
const SUMMARY_COLUMNS: &str = "e.id, e.park_id, e.category_id, e.title, e.description, e.date, \
     e.start_time, e.end_time, e.price, e.capacity, e.current_count, e.status, e.level, \
     p.name AS park_name, c.name AS category_name";

pub struct EventRepo;

impl EventRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an event joined with its park and category names.
    pub async fn find_summary(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EventSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM events e \
             JOIN parks p ON p.id = e.park_id \
             JOIN event_categories c ON c.id = e.category_id \
             WHERE e.id = $1"
        );
        sqlx::query_as::<_, EventSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List open upcoming programs matching the public search filters,
    /// ordered by date then start time.
    pub async fn list_upcoming(
        pool: &PgPool,
        filters: &EventFilters,
        today: NaiveDate,
    ) -> Result<Vec<EventSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM events e \
             JOIN parks p ON p.id = e.park_id \
             JOIN event_categories c ON c.id = e.category_id \
             WHERE e.status = 'open' \
               AND e.date >= $1 \
               AND ($2::uuid IS NULL OR e.category_id = $2) \
               AND ($3::uuid IS NULL OR e.park_id = $3) \
               AND ($4::text IS NULL OR e.level = $4) \
             ORDER BY e.date, e.start_time"
        );
        sqlx::query_as::<_, EventSummary>(&query)
            .bind(filters.date_from.unwrap_or(today).max(today))
            .bind(filters.category_id)
            .bind(filters.park_id)
            .bind(&filters.level)
            .fetch_all(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events \
                (park_id, category_id, title, description, date, start_time, end_time, \
                 price, capacity, level) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {EVENT_COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(input.park_id)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.date)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.price)
            .bind(input.capacity)
            .bind(&input.level)
            .fetch_one(pool)
            .await
    }

    /// Partial update of the admin-editable fields. `current_count` and
    /// `status` are deliberately excluded; the ledger has its own mutator
    /// and status changes go through [`EventRepo::update_status`].
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                park_id = COALESCE($2, park_id), \
                category_id = COALESCE($3, category_id), \
                title = COALESCE($4, title), \
                description = COALESCE($5, description), \
                date = COALESCE($6, date), \
                start_time = COALESCE($7, start_time), \
                end_time = COALESCE($8, end_time), \
                price = COALESCE($9, price), \
                capacity = COALESCE($10, capacity), \
                level = COALESCE($11, level), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {EVENT_COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(input.park_id)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.date)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.price)
            .bind(input.capacity)
            .bind(&input.level)
            .fetch_optional(pool)
            .await
    }

    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET status = $2, updated_at = now() \
             WHERE id = $1 RETURNING {EVENT_COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Atomically increment the capacity ledger, but only below capacity.
    ///
    /// The conditional update replaces the read-modify-write the counter was
    /// originally maintained with: concurrent reconciliations serialize on
    /// the row lock and the ceiling holds `current_count <= capacity` as a
    /// store-enforced invariant rather than an advisory pre-check.
    ///
    /// Returns `false` when the event does not exist or is already at
    /// capacity; the caller decides whether that is an error.
    pub async fn increment_count(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE events SET current_count = current_count + 1, updated_at = now() \
             WHERE id = $1 AND current_count < capacity",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Read the raw ledger value. Used by reconciliation logging and tests.
    pub async fn current_count(pool: &PgPool, id: DbId) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar("SELECT current_count FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
