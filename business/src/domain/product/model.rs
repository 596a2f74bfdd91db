use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::{Category, PLACEHOLDER_IMAGE};

/// User-editable part of a product document.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub name: String,
    pub sku: String,
    pub category: Category,
    pub price: f64,
    pub stock: i64,
    pub image: String,
    pub location: String,
    pub directions: String,
    pub description: Option<String>,
}

impl ProductDetails {
    /// Trims text fields, rounds the price to cents (ties to even) and fills in
    /// the placeholder image and empty description.
    pub fn normalized(self) -> Self {
        let image = self.image.trim();
        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Self {
            name: self.name.trim().to_string(),
            sku: self.sku.trim().to_string(),
            category: self.category,
            price: round_to_cents(self.price),
            stock: self.stock,
            image: if image.is_empty() {
                PLACEHOLDER_IMAGE.to_string()
            } else {
                image.to_string()
            },
            location: self.location.trim().to_string(),
            directions: self.directions.trim().to_string(),
            description,
        }
    }
}

fn round_to_cents(price: f64) -> f64 {
    (price * 100.0).round_ties_even() / 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub details: ProductDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub details: ProductDetails,
    /// Creation time carried over from an imported snapshot.
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let details = props.details.normalized();
        details.validate()?;

        let now = Utc::now();
        let created_at = props
            .created_at
            .filter(|created| *created <= now)
            .unwrap_or(now);

        Ok(Self {
            id: Uuid::new_v4(),
            details,
            created_at,
            updated_at: now,
        })
    }

    /// Replaces the details, keeping identity and creation time.
    pub fn revise(&self, details: ProductDetails) -> Result<Self, ProductError> {
        let details = details.normalized();
        details.validate()?;

        Ok(Self {
            id: self.id,
            details,
            created_at: self.created_at,
            updated_at: Utc::now().max(self.created_at),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        details: ProductDetails,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            details,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::errors::ValidationError;
    use chrono::Duration;

    fn details() -> ProductDetails {
        ProductDetails {
            name: " Organic Apples ".to_string(),
            sku: "APL-ORG-001".to_string(),
            category: Category::Produce,
            price: 3.99,
            stock: 120,
            image: "".to_string(),
            location: "Aisle 2".to_string(),
            directions: "Go straight, second shelf on the right".to_string(),
            description: Some("  ".to_string()),
        }
    }

    #[test]
    fn should_assign_identity_and_timestamps_on_create() {
        let product = Product::new(NewProductProps {
            details: details(),
            created_at: None,
        })
        .unwrap();

        assert_eq!(product.details.name, "Organic Apples");
        assert_eq!(product.details.image, PLACEHOLDER_IMAGE);
        assert!(product.details.description.is_none());
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn should_round_price_to_cents_on_create() {
        let mut props = details();
        props.price = 2.499;
        let product = Product::new(NewProductProps {
            details: props,
            created_at: None,
        })
        .unwrap();
        assert_eq!(product.details.price, 2.5);

        let mut tie = details();
        tie.price = 2.125;
        assert_eq!(tie.normalized().price, 2.12);
    }

    #[test]
    fn should_keep_imported_creation_time() {
        let created_at = Utc::now() - Duration::days(4);
        let product = Product::new(NewProductProps {
            details: details(),
            created_at: Some(created_at),
        })
        .unwrap();

        assert_eq!(product.created_at, created_at);
        assert!(product.updated_at >= product.created_at);
    }

    #[test]
    fn should_ignore_creation_time_in_the_future() {
        let product = Product::new(NewProductProps {
            details: details(),
            created_at: Some(Utc::now() + Duration::days(1)),
        })
        .unwrap();

        assert!(product.updated_at >= product.created_at);
    }

    #[test]
    fn should_reject_invalid_details_on_create() {
        let mut invalid = details();
        invalid.sku = "  ".to_string();

        let result = Product::new(NewProductProps {
            details: invalid,
            created_at: None,
        });

        assert!(matches!(
            result,
            Err(ProductError::Validation(ValidationError::SkuRequired))
        ));
    }

    #[test]
    fn should_preserve_identity_and_creation_on_revise() {
        let created_at = Utc::now() - Duration::days(2);
        let original = Product::from_repository(Uuid::new_v4(), details(), created_at, created_at);
        let mut changed = details();
        changed.stock = 3;

        let revised = original.revise(changed).unwrap();

        assert_eq!(revised.id, original.id);
        assert_eq!(revised.created_at, created_at);
        assert!(revised.updated_at > original.updated_at);
        assert_eq!(revised.details.stock, 3);
    }
}
