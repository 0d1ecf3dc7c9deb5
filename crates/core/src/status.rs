//! Well-known status string constants for events, bookings, and payments.
//!
//! Statuses are stored as plain text columns; these constants must match the
//! CHECK constraints in the initial migration.

/// Event (program) lifecycle statuses.
pub mod event {
    pub const OPEN: &str = "open";
    pub const CLOSED: &str = "closed";
    pub const CANCELLED: &str = "cancelled";

    /// All statuses an admin may set on a program.
    pub const ALL: [&str; 3] = [OPEN, CLOSED, CANCELLED];

    pub fn is_valid(status: &str) -> bool {
        ALL.contains(&status)
    }
}

/// Booking lifecycle statuses.
pub mod booking {
    pub const CONFIRMED: &str = "confirmed";
    pub const CANCELLED: &str = "cancelled";
}

/// Payment lifecycle statuses.
pub mod payment {
    pub const PENDING: &str = "pending";
    pub const SUCCEEDED: &str = "succeeded";
    pub const FAILED: &str = "failed";
    pub const REFUNDED: &str = "refunded";
}
