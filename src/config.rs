//! Session configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PRODUCT_API_URL` - Base URL of the product catalog service
//! - `ORDER_API_URL` - Base URL of the order service
//!
//! A `.env` file in the working directory is honoured by the demo binary.

use thiserror::Error;
use url::Url;

pub const PRODUCT_API_URL: &str = "PRODUCT_API_URL";
pub const ORDER_API_URL: &str = "ORDER_API_URL";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where the two collaborators live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Catalog base URL, without a trailing `/`
    pub product_api_url: String,
    /// Order service base URL, without a trailing `/`
    pub order_api_url: String,
}

impl StorefrontConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is missing or is not an absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            product_api_url: base_url(&lookup, PRODUCT_API_URL)?,
            order_api_url: base_url(&lookup, ORDER_API_URL)?,
        })
    }
}

fn base_url(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String, ConfigError> {
    let raw = lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))?;
    let trimmed = raw.trim().trim_end_matches('/');
    Url::parse(trimmed).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    Ok(trimmed.to_string())
}
