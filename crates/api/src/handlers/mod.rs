//! HTTP handlers, one module per resource.

pub mod admin_bookings;
pub mod admin_events;
pub mod admin_payments;
pub mod auth;
pub mod bookings;
pub mod checkout;
pub mod events;
pub mod lookups;
pub mod webhooks;
