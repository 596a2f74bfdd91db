use crate::domain::errors::RepositoryError;

/// First violated rule of a product draft.
///
/// Rules are checked in declaration order and only the first failure is
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("product.name_required")]
    NameRequired,
    #[error("product.sku_required")]
    SkuRequired,
    #[error("product.price_not_numeric")]
    PriceNotNumeric,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.price_too_large")]
    PriceTooLarge,
    #[error("product.stock_not_numeric")]
    StockNotNumeric,
    #[error("product.stock_negative")]
    StockNegative,
    #[error("product.location_required")]
    LocationRequired,
    #[error("product.directions_required")]
    DirectionsRequired,
}

impl ValidationError {
    /// Name of the offending field as it appears on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "name",
            ValidationError::SkuRequired => "sku",
            ValidationError::PriceNotNumeric
            | ValidationError::PriceNegative
            | ValidationError::PriceTooLarge => "price",
            ValidationError::StockNotNumeric | ValidationError::StockNegative => "stock",
            ValidationError::LocationRequired => "location",
            ValidationError::DirectionsRequired => "directions",
        }
    }

    /// Human readable text for a transient notice.
    pub fn notice(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "Product name is required",
            ValidationError::SkuRequired => "SKU is required",
            ValidationError::PriceNotNumeric => "Price must be a number",
            ValidationError::PriceNegative => "Price cannot be negative",
            ValidationError::PriceTooLarge => "Price is too large",
            ValidationError::StockNotNumeric => "Stock must be a number",
            ValidationError::StockNegative => "Stock cannot be negative",
            ValidationError::LocationRequired => "Location is required",
            ValidationError::DirectionsRequired => "Directions are required",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// Lifts a store error from an id lookup, where a missing row means the
    /// product does not exist.
    pub fn from_lookup(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}
