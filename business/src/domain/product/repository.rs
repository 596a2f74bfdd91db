use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Product Record Store port.
///
/// The store keeps no ordering and no uniqueness beyond `id`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn create(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Fails with [`RepositoryError::NotFound`] when no document has `product.id`.
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Deleting an unknown id succeeds.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
