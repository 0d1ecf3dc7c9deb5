//! Capacity presentation helpers.
//!
//! The `current_count` column on `events` is the capacity ledger: the number
//! of times webhook reconciliation has successfully incremented it. These
//! helpers turn the raw counter into the remaining-seat figures the program
//! detail endpoint exposes.

/// A program with this many seats left (or fewer) is presented as
/// "almost full".
pub const ALMOST_FULL_THRESHOLD: i32 = 3;

/// Remaining seats, clamped at zero.
///
/// The counter can exceed capacity if reconciliation raced before the
/// conditional-update tightening was in place, so never report negative.
pub fn remaining_seats(capacity: i32, current_count: i32) -> i32 {
    (capacity - current_count).max(0)
}

pub fn is_full(capacity: i32, current_count: i32) -> bool {
    remaining_seats(capacity, current_count) == 0
}

/// True when some seats remain but no more than [`ALMOST_FULL_THRESHOLD`].
pub fn is_almost_full(capacity: i32, current_count: i32) -> bool {
    let remaining = remaining_seats(capacity, current_count);
    remaining > 0 && remaining <= ALMOST_FULL_THRESHOLD
}
