//! Stripe integration: outbound checkout session creation and inbound
//! webhook event payload types.

pub mod stripe;
pub mod webhook_event;
