use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDetails};

pub struct CreateProductParams {
    pub details: ProductDetails,
    /// Restored creation time; ignored when it lies in the future.
    pub created_at: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
