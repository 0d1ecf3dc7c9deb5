use std::sync::Arc;

use crate::config::ServerConfig;
use crate::payments::stripe::StripeClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    ///
    /// Webhook reconciliation runs on this pool with the service's own
    /// credentials -- there is no end-user context on those requests.
    pub pool: parkbook_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Stripe API client (hosted checkout sessions).
    pub stripe: Arc<StripeClient>,
}
