use std::env;

use strum_macros::{Display, EnumString};

/// Which Product Record Store adapter backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl StoreBackend {
    /// Load the store backend from environment variables
    ///
    /// Environment variables:
    /// - STORE_BACKEND: "postgres" or "memory" (default: "postgres")
    pub fn from_env() -> anyhow::Result<Self> {
        Self::parse(env::var("STORE_BACKEND").ok().as_deref())
    }

    fn parse(raw: Option<&str>) -> anyhow::Result<Self> {
        match raw.map(str::trim).filter(|value| !value.is_empty()) {
            None => Ok(StoreBackend::Postgres),
            Some(value) => value
                .parse()
                .map_err(|_| anyhow::anyhow!("Unknown STORE_BACKEND: {}", value)),
        }
    }
}
