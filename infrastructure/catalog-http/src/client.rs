use reqwest::Client;
use url::Url;
use uuid::Uuid;

use crate::config::CatalogClientConfig;

/// Shared HTTP client for the Catalog Access API.
pub struct CatalogClient {
    pub client: Client,
    pub base_url: Url,
}

impl CatalogClient {
    pub fn new(config: &CatalogClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Returns the collection endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Returns the endpoint URL of one product.
    pub fn product_url(&self, id: Uuid) -> String {
        format!("{}/{}", self.products_url(), id)
    }
}
