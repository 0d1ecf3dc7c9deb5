//! Booking availability rules.
//!
//! The checkout endpoint runs these checks before opening a hosted payment
//! session. They are advisory: the authoritative capacity enforcement is the
//! conditional counter update performed during webhook reconciliation, so a
//! program can still fill up between a passing check here and the payment
//! completing.

use crate::status;

/// Reasons a checkout request is denied before any payment session is
/// created. All are user-correctable conditions, not server faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BookingDenial {
    #[error("This program is not currently accepting bookings")]
    NotAcceptingBookings,

    #[error("This program is fully booked")]
    Full,

    #[error("You have already booked this program")]
    AlreadyBooked,
}

impl BookingDenial {
    /// Stable machine-readable code used in API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            BookingDenial::NotAcceptingBookings => "NOT_ACCEPTING_BOOKINGS",
            BookingDenial::Full => "FULL",
            BookingDenial::AlreadyBooked => "ALREADY_BOOKED",
        }
    }
}

/// Check whether a program can accept a new booking right now.
///
/// Order matters: a closed program reports `NotAcceptingBookings` even when
/// it is also full, matching the user-facing priority of the messages.
pub fn check_bookable(
    event_status: &str,
    current_count: i32,
    capacity: i32,
) -> Result<(), BookingDenial> {
    if event_status != status::event::OPEN {
        return Err(BookingDenial::NotAcceptingBookings);
    }
    if current_count >= capacity {
        return Err(BookingDenial::Full);
    }
    Ok(())
}
