use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have sensible defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Stripe API and webhook configuration.
    pub stripe: StripeConfig,
}

/// Stripe configuration.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key used for outbound calls (`sk_...`).
    pub secret_key: String,
    /// Webhook endpoint secret (`whsec_...`).
    ///
    /// Optional: without it, inbound webhook signatures are NOT verified and
    /// a warning is logged per delivery. Never run production without it.
    pub webhook_secret: Option<String>,
    /// Base URL of the Stripe API. Overridable for tests.
    pub api_base: String,
    /// ISO currency code for checkout sessions (default: `jpy`).
    pub currency: String,
    /// Frontend origin used to build checkout success/cancel URLs.
    pub frontend_origin: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:3001` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `STRIPE_SECRET_KEY`     | **required**            |
    /// | `STRIPE_WEBHOOK_SECRET` | unset (verification off)|
    /// | `STRIPE_API_BASE`       | `https://api.stripe.com`|
    /// | `CHECKOUT_CURRENCY`     | `jpy`                   |
    /// | `FRONTEND_ORIGIN`       | `http://localhost:3001` |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3001".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            stripe: StripeConfig::from_env(),
        }
    }
}

impl StripeConfig {
    /// Load Stripe configuration from environment variables.
    ///
    /// # Panics
    ///
    /// Panics if `STRIPE_SECRET_KEY` is not set. The webhook secret is
    /// deliberately optional so local development works without a
    /// provisioned endpoint secret; its absence downgrades webhook
    /// authenticity checks and is warned about at startup.
    pub fn from_env() -> Self {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .expect("STRIPE_SECRET_KEY must be set in the environment");

        let webhook_secret = std::env::var("STRIPE_WEBHOOK_SECRET")
            .ok()
            .filter(|s| !s.is_empty());
        if webhook_secret.is_none() {
            tracing::warn!(
                "STRIPE_WEBHOOK_SECRET not configured - webhook signatures will not be verified"
            );
        }

        let api_base = std::env::var("STRIPE_API_BASE")
            .unwrap_or_else(|_| "https://api.stripe.com".into());

        let currency = std::env::var("CHECKOUT_CURRENCY").unwrap_or_else(|_| "jpy".into());

        let frontend_origin =
            std::env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:3001".into());

        Self {
            secret_key,
            webhook_secret,
            api_base,
            currency,
            frontend_origin,
        }
    }
}
