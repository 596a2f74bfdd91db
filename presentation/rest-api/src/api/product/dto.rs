use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::product::model::{Product, ProductDetails};
use business::domain::product::value_objects::Category;

/// Request body for creating a product
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub sku: String,
    /// One of the catalog categories; anything else is stored as "Other"
    #[oai(default)]
    pub category: String,
    pub price: f64,
    pub stock: i64,
    #[oai(default)]
    pub image: String,
    pub location: String,
    pub directions: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Creation time in epoch milliseconds, kept when restoring an export
    #[oai(skip_serializing_if_is_none)]
    pub created_at: Option<i64>,
}

/// Request body for replacing a product's fields
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: String,
    pub sku: String,
    #[oai(default)]
    pub category: String,
    pub price: f64,
    pub stock: i64,
    #[oai(default)]
    pub image: String,
    pub location: String,
    pub directions: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
    pub image: String,
    pub location: String,
    pub directions: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Epoch milliseconds
    pub updated_at: i64,
}

impl CreateProductRequest {
    /// Splits the body into details and the optional creation time.
    ///
    /// An out-of-range `createdAt` is dropped and the server stamps `now`.
    pub fn into_parts(self) -> (ProductDetails, Option<DateTime<Utc>>) {
        let created_at = self.created_at.and_then(DateTime::from_timestamp_millis);
        let details = ProductDetails {
            category: Category::parse_lenient(&self.category),
            name: self.name,
            sku: self.sku,
            price: self.price,
            stock: self.stock,
            image: self.image,
            location: self.location,
            directions: self.directions,
            description: self.description,
        };
        (details, created_at)
    }
}

impl From<UpdateProductRequest> for ProductDetails {
    fn from(request: UpdateProductRequest) -> Self {
        Self {
            category: Category::parse_lenient(&request.category),
            name: request.name,
            sku: request.sku,
            price: request.price,
            stock: request.stock,
            image: request.image,
            location: request.location,
            directions: request.directions,
            description: request.description,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let ProductDetails {
            name,
            sku,
            category,
            price,
            stock,
            image,
            location,
            directions,
            description,
        } = product.details;

        Self {
            id: product.id,
            name,
            sku,
            category: category.to_string(),
            price,
            stock,
            image,
            location,
            directions,
            description,
            created_at: product.created_at.timestamp_millis(),
            updated_at: product.updated_at.timestamp_millis(),
        }
    }
}
