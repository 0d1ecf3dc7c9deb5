//! Inbound Stripe webhook event payload types.
//!
//! Only the fields reconciliation needs are modeled; everything else in the
//! event envelope is ignored by serde.

use std::collections::HashMap;

use serde::Deserialize;

/// The event kind that triggers reconciliation.
pub const CHECKOUT_COMPLETED: &str = "checkout.session.completed";

/// A duplicate/backup signal for the same transaction. Acknowledged and
/// logged, never reconciled: it lacks the checkout metadata and the
/// completed-checkout event is the single trigger.
pub const PAYMENT_SUCCEEDED: &str = "payment_intent.succeeded";

/// A Stripe webhook event envelope.
#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    /// Stripe's event id (`evt_...`).
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub data: WebhookEventData,
}

#[derive(Debug, Deserialize)]
pub struct WebhookEventData {
    pub object: CheckoutObject,
}

/// The `data.object` of a completed-checkout event.
///
/// For other event kinds the same struct deserializes loosely (only `id` is
/// universal), which is fine: those kinds never reach the fields below.
#[derive(Debug, Deserialize)]
pub struct CheckoutObject {
    /// Checkout session id (`cs_...`) or payment intent id (`pi_...`).
    pub id: String,
    /// The payment intent behind the checkout session.
    #[serde(default)]
    pub payment_intent: Option<String>,
    /// Total captured amount in minor currency units.
    #[serde(default)]
    pub amount_total: Option<i64>,
    /// Opaque correlation metadata set by the checkout initiator.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl CheckoutObject {
    /// The transaction id recorded on the payment row: the payment intent
    /// when present, else the checkout session id.
    pub fn transaction_id(&self) -> &str {
        self.payment_intent.as_deref().unwrap_or(&self.id)
    }
}
