//! Repository for the `payments` table.

use parkbook_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::payment::{AdminPayment, Payment};

const PAYMENT_COLUMNS: &str =
    "id, booking_id, stripe_payment_id, amount, status, paid_at, created_at";

pub struct PaymentRepo;

impl PaymentRepo {
    /// Insert a succeeded payment record for a booking.
    ///
    /// Reconciliation calls this exactly once per booking; there is no
    /// update path in this workflow (refund/failure transitions are handled
    /// out of band).
    pub async fn create_succeeded(
        pool: &PgPool,
        booking_id: DbId,
        stripe_payment_id: &str,
        amount: i64,
        paid_at: Timestamp,
    ) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payments (booking_id, stripe_payment_id, amount, status, paid_at) \
             VALUES ($1, $2, $3, 'succeeded', $4) \
             RETURNING {PAYMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(booking_id)
            .bind(stripe_payment_id)
            .bind(amount)
            .bind(paid_at)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_booking(
        pool: &PgPool,
        booking_id: DbId,
    ) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!("SELECT {PAYMENT_COLUMNS} FROM payments WHERE booking_id = $1");
        sqlx::query_as::<_, Payment>(&query)
            .bind(booking_id)
            .fetch_optional(pool)
            .await
    }

    /// Admin payment review list, newest first.
    ///
    /// Payer profile is LEFT JOINed so a payment is still reviewable when
    /// the profile row is gone.
    pub async fn list_admin(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AdminPayment>, sqlx::Error> {
        sqlx::query_as::<_, AdminPayment>(
            "SELECT pay.id, pay.booking_id, pay.stripe_payment_id, pay.amount, pay.status, \
                    pay.paid_at, pay.created_at, \
                    e.title, e.date, pr.nickname \
             FROM payments pay \
             JOIN bookings b ON b.id = pay.booking_id \
             JOIN events e ON e.id = b.event_id \
             LEFT JOIN profiles pr ON pr.id = b.user_id \
             ORDER BY pay.created_at DESC \
             LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }
}
