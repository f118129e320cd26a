//! Widget configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `LOCALCART_SHIPPING_FLAT_RATE` - Flat shipping surcharge applied to any
//!   non-empty cart (default: 15.00)
//! - `LOCALCART_LOGIN_URL` - Navigation target after logout (default: login.html)
//! - `LOCALCART_CHECKOUT_URL` - Navigation target for checkout handoff
//!   (default: checkout.html)

use rust_decimal::Decimal;
use thiserror::Error;

use localcart_core::Price;

const DEFAULT_SHIPPING_FLAT_RATE_CENTS: i64 = 1500;
const DEFAULT_LOGIN_URL: &str = "login.html";
const DEFAULT_CHECKOUT_URL: &str = "checkout.html";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Widget configuration.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Flat shipping surcharge charged whenever the subtotal is positive.
    pub shipping_flat_rate: Price,
    /// Where logout navigates to.
    pub login_url: String,
    /// Where checkout handoff navigates to.
    pub checkout_url: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            shipping_flat_rate: Price::from_cents(DEFAULT_SHIPPING_FLAT_RATE_CENTS),
            login_url: DEFAULT_LOGIN_URL.to_string(),
            checkout_url: DEFAULT_CHECKOUT_URL.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `LOCALCART_SHIPPING_FLAT_RATE` is set but is
    /// not a valid decimal amount.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let shipping_flat_rate = match get_optional_env("LOCALCART_SHIPPING_FLAT_RATE") {
            Some(raw) => raw
                .parse::<Decimal>()
                .map(Price::new)
                .map_err(|e| {
                    ConfigError::InvalidEnvVar(
                        "LOCALCART_SHIPPING_FLAT_RATE".to_string(),
                        e.to_string(),
                    )
                })?,
            None => Price::from_cents(DEFAULT_SHIPPING_FLAT_RATE_CENTS),
        };

        Ok(Self {
            shipping_flat_rate,
            login_url: get_env_or_default("LOCALCART_LOGIN_URL", DEFAULT_LOGIN_URL),
            checkout_url: get_env_or_default("LOCALCART_CHECKOUT_URL", DEFAULT_CHECKOUT_URL),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
