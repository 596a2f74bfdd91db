use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Store department a product belongs to.
///
/// Parsing is lenient through [`Category::parse_lenient`]: anything outside the
/// fixed set collapses into [`Category::Other`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Category {
    Grocery,
    Bakery,
    Produce,
    Dairy,
    Electronics,
    Home,
    Health,
    Beauty,
    #[default]
    Other,
}

impl Category {
    pub fn parse_lenient(raw: &str) -> Self {
        raw.trim().parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Every category in menu order.
    pub fn all() -> Vec<Category> {
        Category::iter().collect()
    }
}

/// Image shown when a product has none.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400?text=Product";

/// Largest price a store column of twelve digits with two decimals can hold.
pub const MAX_PRICE: f64 = 9_999_999_999.99;

/// Stock level below which a product counts as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_category() {
        assert_eq!(Category::parse_lenient("Dairy"), Category::Dairy);
        assert_eq!(Category::parse_lenient("  Bakery "), Category::Bakery);
    }

    #[test]
    fn should_fall_back_to_other_when_category_unknown() {
        assert_eq!(Category::parse_lenient("Garden"), Category::Other);
        assert_eq!(Category::parse_lenient(""), Category::Other);
    }

    #[test]
    fn should_list_categories_in_menu_order() {
        let names: Vec<String> = Category::all().iter().map(|c| c.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "Grocery",
                "Bakery",
                "Produce",
                "Dairy",
                "Electronics",
                "Home",
                "Health",
                "Beauty",
                "Other"
            ]
        );
    }

    #[test]
    fn should_expose_category_as_str() {
        assert_eq!(Category::Electronics.as_str(), "Electronics");
    }
}
