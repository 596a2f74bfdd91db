use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClientConfigError {
    #[error("client_config.invalid_url")]
    InvalidUrl,
    #[error("client_config.invalid_timeout")]
    InvalidTimeout,
}

/// Where the Catalog Access API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl CatalogClientConfig {
    /// Load client configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_API_URL: base URL of the API (default: "http://127.0.0.1:8080")
    /// - CATALOG_API_TIMEOUT_SECS: request timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self, ClientConfigError> {
        Self::parse(
            env::var("CATALOG_API_URL").ok().as_deref(),
            env::var("CATALOG_API_TIMEOUT_SECS").ok().as_deref(),
        )
    }

    fn parse(url: Option<&str>, timeout: Option<&str>) -> Result<Self, ClientConfigError> {
        let base_url = Url::parse(url.unwrap_or(DEFAULT_API_URL))
            .map_err(|_| ClientConfigError::InvalidUrl)?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientConfigError::InvalidUrl);
        }

        let timeout_secs = match timeout {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ClientConfigError::InvalidTimeout)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
