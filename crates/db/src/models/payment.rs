//! Payment record entity models.

use chrono::NaiveDate;
use parkbook_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `payments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub booking_id: DbId,
    /// Stripe payment intent id (falls back to the checkout session id).
    pub stripe_payment_id: Option<String>,
    /// Captured amount in minor currency units.
    pub amount: i64,
    pub status: String,
    pub paid_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// An admin-view payment row joined with its booking, program, and payer.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminPayment {
    pub id: DbId,
    pub booking_id: DbId,
    pub stripe_payment_id: Option<String>,
    pub amount: i64,
    pub status: String,
    pub paid_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub title: String,
    pub date: NaiveDate,
    pub nickname: Option<String>,
}
