use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::product::model::{Product, ProductDetails};

use super::errors::GatewayError;

/// Body of a create request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSubmission {
    pub details: ProductDetails,
    /// Set when restoring an imported record; the server stamps `now` otherwise.
    pub created_at: Option<DateTime<Utc>>,
}

/// Client port onto the Catalog Access API.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Product>, GatewayError>;
    async fn create(&self, submission: &ProductSubmission) -> Result<Product, GatewayError>;
    async fn update(&self, id: Uuid, details: &ProductDetails) -> Result<Product, GatewayError>;
    async fn delete(&self, id: Uuid) -> Result<(), GatewayError>;
}
