//! REST API client for Stripe hosted checkout sessions.
//!
//! Wraps the `POST /v1/checkout/sessions` endpoint using [`reqwest`].
//! Stripe's API takes form-encoded bodies with bracketed nesting
//! (`line_items[0][price_data][currency]=jpy`), so parameters are built as
//! flat key/value pairs rather than JSON.

use serde::Deserialize;

use crate::config::StripeConfig;

/// HTTP client for the Stripe API.
pub struct StripeClient {
    client: reqwest::Client,
    api_base: String,
    secret_key: String,
}

/// Parameters for creating a hosted checkout session.
///
/// `event_id` and `user_id` ride along as opaque metadata; the webhook
/// handler reads them back to correlate the completed payment with the
/// booking it entitles.
#[derive(Debug)]
pub struct CheckoutSessionParams {
    pub currency: String,
    /// Amount in minor currency units.
    pub unit_amount: i64,
    pub product_name: String,
    pub product_description: String,
    pub success_url: String,
    pub cancel_url: String,
    pub event_id: String,
    pub user_id: String,
}

/// The subset of Stripe's checkout session object the initiator needs.
#[derive(Debug, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    /// Processor-issued redirect URL for the hosted payment page.
    pub url: String,
}

/// Errors from the Stripe REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Stripe returned a non-2xx status code.
    #[error("Stripe API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl StripeClient {
    /// Create a new client from the Stripe configuration.
    pub fn new(config: &StripeConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.api_base.clone(),
            secret_key: config.secret_key.clone(),
        }
    }

    /// Create a hosted checkout session and return its redirect URL.
    ///
    /// Card entry and capture happen entirely on Stripe's side; no payment
    /// detail ever touches this server.
    pub async fn create_checkout_session(
        &self,
        params: &CheckoutSessionParams,
    ) -> Result<CheckoutSession, StripeError> {
        let form: Vec<(&str, String)> = vec![
            ("mode", "payment".to_string()),
            ("payment_method_types[0]", "card".to_string()),
            (
                "line_items[0][price_data][currency]",
                params.currency.clone(),
            ),
            (
                "line_items[0][price_data][unit_amount]",
                params.unit_amount.to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]",
                params.product_name.clone(),
            ),
            (
                "line_items[0][price_data][product_data][description]",
                params.product_description.clone(),
            ),
            ("line_items[0][quantity]", "1".to_string()),
            ("success_url", params.success_url.clone()),
            ("cancel_url", params.cancel_url.clone()),
            ("metadata[event_id]", params.event_id.clone()),
            ("metadata[user_id]", params.user_id.clone()),
        ];

        let response = self
            .client
            .post(format!("{}/v1/checkout/sessions", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StripeError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<CheckoutSession>().await?)
    }
}
