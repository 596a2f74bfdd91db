use crate::domain::product::value_objects::LOW_STOCK_THRESHOLD;

use super::entry::CatalogItem;

/// Headline figures of the owner dashboard, computed over the full set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventorySummary {
    pub total_products: usize,
    pub low_stock: usize,
    pub average_price: f64,
    pub inventory_value: f64,
}

impl InventorySummary {
    pub fn from_items<T: CatalogItem>(items: &[T]) -> Self {
        let total_products = items.len();
        let low_stock = items
            .iter()
            .filter(|item| item.details().stock < LOW_STOCK_THRESHOLD)
            .count();
        let price_sum: f64 = items.iter().map(|item| item.details().price).sum();
        let inventory_value: f64 = items
            .iter()
            .map(|item| item.details().price * item.details().stock as f64)
            .sum();
        let average_price = if total_products == 0 {
            0.0
        } else {
            price_sum / total_products as f64
        };

        Self {
            total_products,
            low_stock,
            average_price,
            inventory_value,
        }
    }
}
