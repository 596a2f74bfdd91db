use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::{ProductEntity, price_to_column};

const SELECT_COLUMNS: &str = "SELECT id, name, sku, category, price, stock, image, location, directions, description, created_at, updated_at FROM products";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "{} ORDER BY created_at DESC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch products: {}", e);
            RepositoryError::DatabaseError
        })?;

        entities.into_iter().map(ProductEntity::into_domain).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch product {}: {}", id, e);
                RepositoryError::DatabaseError
            })?
            .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn create(&self, product: &Product) -> Result<(), RepositoryError> {
        let details = &product.details;

        sqlx::query(
            r#"INSERT INTO products (id, name, sku, category, price, stock, image, location, directions, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)"#,
        )
        .bind(product.id)
        .bind(&details.name)
        .bind(&details.sku)
        .bind(details.category.as_str())
        .bind(price_to_column(details.price)?)
        .bind(details.stock)
        .bind(&details.image)
        .bind(&details.location)
        .bind(&details.directions)
        .bind(&details.description)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert product {}: {}", product.id, e);
            RepositoryError::DatabaseError
        })?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let details = &product.details;

        let result = sqlx::query(
            r#"UPDATE products SET
                name = $2,
                sku = $3,
                category = $4,
                price = $5,
                stock = $6,
                image = $7,
                location = $8,
                directions = $9,
                description = $10,
                updated_at = $11
            WHERE id = $1"#,
        )
        .bind(product.id)
        .bind(&details.name)
        .bind(&details.sku)
        .bind(details.category.as_str())
        .bind(price_to_column(details.price)?)
        .bind(details.stock)
        .bind(&details.image)
        .bind(&details.location)
        .bind(&details.directions)
        .bind(&details.description)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update product {}: {}", product.id, e);
            RepositoryError::DatabaseError
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete product {}: {}", id, e);
                RepositoryError::DatabaseError
            })?;

        Ok(())
    }
}
