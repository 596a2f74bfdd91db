use super::errors::ValidationError;
use super::model::ProductDetails;
use super::value_objects::MAX_PRICE;

pub(crate) fn require(value: &str, error: ValidationError) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(())
}

pub(crate) fn check_price(price: f64) -> Result<f64, ValidationError> {
    if !price.is_finite() {
        return Err(ValidationError::PriceNotNumeric);
    }
    if price < 0.0 {
        return Err(ValidationError::PriceNegative);
    }
    if price > MAX_PRICE {
        return Err(ValidationError::PriceTooLarge);
    }
    Ok(price)
}

pub(crate) fn check_stock(stock: i64) -> Result<i64, ValidationError> {
    if stock < 0 {
        return Err(ValidationError::StockNegative);
    }
    Ok(stock)
}

pub(crate) fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let price = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::PriceNotNumeric)?;
    check_price(price)
}

pub(crate) fn parse_stock(raw: &str) -> Result<i64, ValidationError> {
    let stock = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::StockNotNumeric)?;
    check_stock(stock)
}

impl ProductDetails {
    /// Runs the write rules against already typed details.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, ValidationError::NameRequired)?;
        require(&self.sku, ValidationError::SkuRequired)?;
        check_price(self.price)?;
        check_stock(self.stock)?;
        require(&self.location, ValidationError::LocationRequired)?;
        require(&self.directions, ValidationError::DirectionsRequired)?;
        Ok(())
    }
}
