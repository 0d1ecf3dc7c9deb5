//! Repository for the `bookings` table and its admin/user projections.

use parkbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::booking::{AdminBooking, Booking, BookingFilters, Participant, UserBooking};

/// Column list for `bookings` queries.
const BOOKING_COLUMNS: &str = "id, user_id, event_id, status, created_at, cancelled_at";

pub struct BookingRepo;

impl BookingRepo {
    /// Find the confirmed booking for a (user, event) pair, if any.
    ///
    /// This is the webhook idempotency check and the checkout
    /// already-booked check.
    pub async fn find_confirmed(
        pool: &PgPool,
        user_id: DbId,
        event_id: DbId,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings \
             WHERE user_id = $1 AND event_id = $2 AND status = 'confirmed'"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(user_id)
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a confirmed booking.
    ///
    /// Returns `Ok(None)` when a confirmed booking for the pair already
    /// exists: the insert defers to the partial unique index
    /// `uq_bookings_user_event_confirmed` via `ON CONFLICT DO NOTHING`, so
    /// two concurrent reconciliations for the same completion event cannot
    /// both create a row. The loser sees `None` and treats the delivery as
    /// a duplicate.
    pub async fn create_confirmed(
        pool: &PgPool,
        user_id: DbId,
        event_id: DbId,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (user_id, event_id, status) \
             VALUES ($1, $2, 'confirmed') \
             ON CONFLICT (user_id, event_id) WHERE status = 'confirmed' DO NOTHING \
             RETURNING {BOOKING_COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(user_id)
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }

    /// A user's own bookings, newest first, joined with program, park, and
    /// payment. Bookings without a payment row still appear.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserBooking>, sqlx::Error> {
        sqlx::query_as::<_, UserBooking>(
            "SELECT b.id, b.event_id, b.status, b.created_at, \
                    e.title, e.date, e.start_time, e.end_time, \
                    p.name AS park_name, \
                    pay.amount AS payment_amount, pay.status AS payment_status, pay.paid_at \
             FROM bookings b \
             JOIN events e ON e.id = b.event_id \
             JOIN parks p ON p.id = e.park_id \
             LEFT JOIN payments pay ON pay.booking_id = b.id \
             WHERE b.user_id = $1 \
             ORDER BY b.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Admin search across all bookings.
    ///
    /// Profiles are LEFT JOINed: a missing or incomplete profile must not
    /// drop the booking from the result set.
    pub async fn search(
        pool: &PgPool,
        filters: &BookingFilters,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AdminBooking>, sqlx::Error> {
        sqlx::query_as::<_, AdminBooking>(
            "SELECT b.id, b.user_id, b.event_id, b.status, b.created_at, b.cancelled_at, \
                    pr.nickname, pr.phone, \
                    e.title, e.date, pk.name AS park_name, \
                    pay.amount AS payment_amount, pay.status AS payment_status \
             FROM bookings b \
             JOIN events e ON e.id = b.event_id \
             JOIN parks pk ON pk.id = e.park_id \
             LEFT JOIN profiles pr ON pr.id = b.user_id \
             LEFT JOIN payments pay ON pay.booking_id = b.id \
             WHERE ($1::text IS NULL \
                    OR pr.nickname ILIKE $1 \
                    OR pr.phone ILIKE $1 \
                    OR e.title ILIKE $1) \
               AND ($2::uuid IS NULL OR e.park_id = $2) \
               AND ($3::date IS NULL OR e.date = $3) \
               AND ($4::text IS NULL OR b.status = $4) \
             ORDER BY b.created_at DESC \
             LIMIT $5 OFFSET $6",
        )
        .bind(&filters.query)
        .bind(filters.park_id)
        .bind(filters.date)
        .bind(&filters.status)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Confirmed participants of one program, in booking order.
    pub async fn participants(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<Participant>, sqlx::Error> {
        sqlx::query_as::<_, Participant>(
            "SELECT b.id AS booking_id, b.user_id, b.created_at AS booked_at, \
                    pr.nickname, pr.phone, \
                    pay.amount AS payment_amount, pay.status AS payment_status \
             FROM bookings b \
             LEFT JOIN profiles pr ON pr.id = b.user_id \
             LEFT JOIN payments pay ON pay.booking_id = b.id \
             WHERE b.event_id = $1 AND b.status = 'confirmed' \
             ORDER BY b.created_at",
        )
        .bind(event_id)
        .fetch_all(pool)
        .await
    }

    /// Count confirmed bookings for an event. Tests use this to compare the
    /// ledger against the true booking count.
    pub async fn count_confirmed(pool: &PgPool, event_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM bookings WHERE event_id = $1 AND status = 'confirmed'",
        )
        .bind(event_id)
        .fetch_one(pool)
        .await
    }
}
