use bigdecimal::{BigDecimal, RoundingMode};
use chrono::{DateTime, Utc};
use num_traits::{FromPrimitive, ToPrimitive};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDetails};
use business::domain::product::value_objects::Category;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: BigDecimal,
    pub stock: i64,
    pub image: String,
    pub location: String,
    pub directions: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let price = self.price.to_f64().ok_or(RepositoryError::DatabaseError)?;

        Ok(Product::from_repository(
            self.id,
            ProductDetails {
                name: self.name,
                sku: self.sku,
                category: Category::parse_lenient(&self.category),
                price,
                stock: self.stock,
                image: self.image,
                location: self.location,
                directions: self.directions,
                description: self.description,
            },
            self.created_at,
            self.updated_at,
        ))
    }
}

/// Price as stored: two decimal places.
pub fn price_to_column(price: f64) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_f64(price)
        .map(|p| p.with_scale_round(2, RoundingMode::HalfEven))
        .ok_or(RepositoryError::DatabaseError)
}
