use chrono::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::catalog::errors::GatewayError;
use business::domain::catalog::gateway::ProductSubmission;
use business::domain::product::model::{Product, ProductDetails};
use business::domain::product::value_objects::Category;

/// Request body for create and update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
    pub image: String,
    pub location: String,
    pub directions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl ProductPayload {
    pub fn from_details(details: &ProductDetails) -> Self {
        Self {
            name: details.name.clone(),
            sku: details.sku.clone(),
            category: details.category.to_string(),
            price: details.price,
            stock: details.stock,
            image: details.image.clone(),
            location: details.location.clone(),
            directions: details.directions.clone(),
            description: details.description.clone(),
            created_at: None,
        }
    }
}

impl From<&ProductSubmission> for ProductPayload {
    fn from(submission: &ProductSubmission) -> Self {
        Self {
            created_at: submission.created_at.map(|at| at.timestamp_millis()),
            ..Self::from_details(&submission.details)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBody {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
    #[serde(default)]
    pub image: String,
    pub location: String,
    pub directions: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl ProductBody {
    pub fn into_domain(self) -> Result<Product, GatewayError> {
        let created_at = DateTime::from_timestamp_millis(self.created_at)
            .ok_or_else(|| GatewayError::Transport("catalog.invalid_timestamp".to_string()))?;
        let updated_at = DateTime::from_timestamp_millis(self.updated_at)
            .ok_or_else(|| GatewayError::Transport("catalog.invalid_timestamp".to_string()))?;

        let details = ProductDetails {
            name: self.name,
            sku: self.sku,
            category: Category::parse_lenient(&self.category),
            price: self.price,
            stock: self.stock,
            image: self.image,
            location: self.location,
            directions: self.directions,
            description: self.description,
        }
        .normalized();

        Ok(Product::from_repository(self.id, details, created_at, updated_at))
    }
}

/// Error body returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub name: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::value_objects::PLACEHOLDER_IMAGE;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn details() -> ProductDetails {
        ProductDetails {
            name: "Fresh Sourdough Bread".to_string(),
            sku: "BRD-SRD-014".to_string(),
            category: Category::Bakery,
            price: 2.5,
            stock: 45,
            image: "https://example.com/bread.jpg".to_string(),
            location: "Bakery".to_string(),
            directions: "Left from entrance".to_string(),
            description: None,
        }
    }

    #[test]
    fn should_serialize_submission_in_camel_case() {
        let submission = ProductSubmission {
            details: details(),
            created_at: Some(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()),
        };

        let value = serde_json::to_value(ProductPayload::from(&submission)).unwrap();

        assert_eq!(value["createdAt"], json!(1_700_000_000_000i64));
        assert_eq!(value["category"], json!("Bakery"));
        assert!(value.get("description").is_none());
    }

    #[test]
    fn should_omit_created_at_on_update() {
        let value = serde_json::to_value(ProductPayload::from_details(&details())).unwrap();

        assert!(value.get("createdAt").is_none());
    }

    #[test]
    fn should_read_response_into_domain() {
        let id = Uuid::new_v4();
        let body: ProductBody = serde_json::from_value(json!({
            "id": id,
            "name": "Whole Milk 1L",
            "sku": "MLK-WHL-1L",
            "category": "Beverages",
            "price": 1.99,
            "stock": 200,
            "image": "",
            "location": "Refrigerated Aisle",
            "directions": "Back of store",
            "createdAt": 1_700_000_000_000i64,
            "updatedAt": 1_700_000_500_000i64
        }))
        .unwrap();

        let product = body.into_domain().unwrap();

        assert_eq!(product.id, id);
        assert_eq!(product.details.category, Category::Other);
        assert_eq!(product.details.image, PLACEHOLDER_IMAGE);
        assert_eq!(product.details.description, None);
        assert_eq!(product.updated_at.timestamp_millis(), 1_700_000_500_000);
    }

    #[test]
    fn should_refuse_out_of_range_timestamps() {
        let body = ProductBody {
            id: Uuid::new_v4(),
            name: "X".to_string(),
            sku: "X".to_string(),
            category: "Other".to_string(),
            price: 1.0,
            stock: 1,
            image: String::new(),
            location: "A".to_string(),
            directions: "B".to_string(),
            description: None,
            created_at: i64::MAX,
            updated_at: 0,
        };

        assert!(matches!(body.into_domain(), Err(GatewayError::Transport(_))));
    }
}
