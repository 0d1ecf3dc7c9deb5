//! Booking entity models and read projections.

use chrono::{NaiveDate, NaiveTime};
use parkbook_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub user_id: DbId,
    pub event_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub cancelled_at: Option<Timestamp>,
}

/// A user's booking joined with its program, park, and payment.
///
/// The payment columns are `Option` because the payment record is secondary
/// bookkeeping: reconciliation acknowledges a completed checkout even if the
/// payment insert failed, so a booking may legitimately have no payment row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserBooking {
    pub id: DbId,
    pub event_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub park_name: String,
    pub payment_amount: Option<i64>,
    pub payment_status: Option<String>,
    pub paid_at: Option<Timestamp>,
}

/// An admin-view booking row joined with profile, program, and payment.
///
/// Profile columns are `Option`: a booking survives even when the profile
/// row is missing or incomplete, and the admin view must still render it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminBooking {
    pub id: DbId,
    pub user_id: DbId,
    pub event_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub cancelled_at: Option<Timestamp>,
    pub nickname: Option<String>,
    pub phone: Option<String>,
    pub title: String,
    pub date: NaiveDate,
    pub park_name: String,
    pub payment_amount: Option<i64>,
    pub payment_status: Option<String>,
}

/// A participant row for one program's admin participant list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Participant {
    pub booking_id: DbId,
    pub user_id: DbId,
    pub booked_at: Timestamp,
    pub nickname: Option<String>,
    pub phone: Option<String>,
    pub payment_amount: Option<i64>,
    pub payment_status: Option<String>,
}

/// Filters for the admin booking search.
#[derive(Debug, Clone, Default)]
pub struct BookingFilters {
    /// Free-text match against nickname, phone, or program title.
    pub query: Option<String>,
    pub park_id: Option<DbId>,
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
}
