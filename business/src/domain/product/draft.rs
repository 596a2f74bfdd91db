use super::errors::ValidationError;
use super::model::ProductDetails;
use super::validation::{parse_price, parse_stock, require};
use super::value_objects::Category;

/// Product form input as typed by the store owner, before any parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub image: String,
    pub location: String,
    pub directions: String,
    pub description: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            sku: String::new(),
            category: Category::Other.to_string(),
            price: String::new(),
            stock: String::new(),
            image: String::new(),
            location: String::new(),
            directions: String::new(),
            description: String::new(),
        }
    }
}

impl ProductDraft {
    /// Prefills the form from an existing product.
    pub fn from_details(details: &ProductDetails) -> Self {
        Self {
            name: details.name.clone(),
            sku: details.sku.clone(),
            category: details.category.to_string(),
            price: details.price.to_string(),
            stock: details.stock.to_string(),
            image: details.image.clone(),
            location: details.location.clone(),
            directions: details.directions.clone(),
            description: details.description.clone().unwrap_or_default(),
        }
    }

    /// Parses the draft into typed details, stopping at the first violated rule.
    pub fn validate(&self) -> Result<ProductDetails, ValidationError> {
        require(&self.name, ValidationError::NameRequired)?;
        require(&self.sku, ValidationError::SkuRequired)?;
        let price = parse_price(&self.price)?;
        let stock = parse_stock(&self.stock)?;
        require(&self.location, ValidationError::LocationRequired)?;
        require(&self.directions, ValidationError::DirectionsRequired)?;

        Ok(ProductDetails {
            name: self.name.clone(),
            sku: self.sku.clone(),
            category: Category::parse_lenient(&self.category),
            price,
            stock,
            image: self.image.clone(),
            location: self.location.clone(),
            directions: self.directions.clone(),
            description: Some(self.description.clone()),
        }
        .normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::PLACEHOLDER_IMAGE;

    fn filled() -> ProductDraft {
        ProductDraft {
            name: "Fresh Sourdough Bread".to_string(),
            sku: "BRD-SRD-014".to_string(),
            category: "Bakery".to_string(),
            price: "2.5".to_string(),
            stock: "45".to_string(),
            image: "".to_string(),
            location: "Bakery".to_string(),
            directions: "Left from entrance, near the counter".to_string(),
            description: "Daily baked sourdough loaf".to_string(),
        }
    }

    #[test]
    fn should_parse_filled_draft() {
        let details = filled().validate().unwrap();

        assert_eq!(details.price, 2.5);
        assert_eq!(details.stock, 45);
        assert_eq!(details.category, Category::Bakery);
        assert_eq!(details.image, PLACEHOLDER_IMAGE);
        assert_eq!(
            details.description.as_deref(),
            Some("Daily baked sourdough loaf")
        );
    }

    #[test]
    fn should_report_name_even_when_everything_is_missing() {
        assert_eq!(
            ProductDraft::default().validate(),
            Err(ValidationError::NameRequired)
        );
    }

    #[test]
    fn should_follow_rule_precedence() {
        let mut draft = ProductDraft {
            name: "Bread".to_string(),
            ..ProductDraft::default()
        };
        assert_eq!(draft.validate(), Err(ValidationError::SkuRequired));

        draft.sku = "BRD".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::PriceNotNumeric));

        draft.price = "1.5".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::StockNotNumeric));

        draft.stock = "4".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::LocationRequired));

        draft.location = "Bakery".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::DirectionsRequired));

        draft.directions = "Left".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn should_reject_stock_that_is_not_a_number() {
        let draft = ProductDraft {
            stock: "abc".to_string(),
            ..filled()
        };
        let err = draft.validate().unwrap_err();

        assert_eq!(err, ValidationError::StockNotNumeric);
        assert_eq!(err.field(), "stock");
        assert_eq!(err.notice(), "Stock must be a number");
    }

    #[test]
    fn should_default_unknown_category_to_other() {
        let draft = ProductDraft {
            category: "Toys".to_string(),
            ..filled()
        };
        assert_eq!(draft.validate().unwrap().category, Category::Other);
    }

    #[test]
    fn should_round_trip_through_edit_form() {
        let details = filled().validate().unwrap();
        let again = ProductDraft::from_details(&details).validate().unwrap();
        assert_eq!(details, again);
    }
}
