use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;

use crate::domain::product::model::ProductDetails;
use crate::domain::product::value_objects::Category;

use super::entry::{CatalogEntry, Identity, LocalKey};

struct SampleProduct {
    details: ProductDetails,
    created_days_ago: i64,
    updated_days_ago: i64,
}

static SAMPLE_PRODUCTS: Lazy<Vec<SampleProduct>> = Lazy::new(|| {
    vec![
        SampleProduct {
            details: ProductDetails {
                name: "Organic Apples".to_string(),
                sku: "APL-ORG-001".to_string(),
                category: Category::Produce,
                price: 3.99,
                stock: 120,
                image: "https://images.unsplash.com/photo-1567306226416-28f0efdc88ce?w=800&q=80&auto=format&fit=crop".to_string(),
                location: "Aisle 2".to_string(),
                directions: "Go straight, second shelf on the right".to_string(),
                description: Some("Crisp, fresh, organically grown apples.".to_string()),
            },
            created_days_ago: 4,
            updated_days_ago: 2,
        },
        SampleProduct {
            details: ProductDetails {
                name: "Fresh Sourdough Bread".to_string(),
                sku: "BRD-SRD-014".to_string(),
                category: Category::Bakery,
                price: 2.5,
                stock: 45,
                image: "https://images.unsplash.com/photo-1608198093002-ad4e0054842e?w=800&q=80&auto=format&fit=crop".to_string(),
                location: "Bakery".to_string(),
                directions: "Left from entrance, near the counter".to_string(),
                description: Some("Daily baked sourdough loaf with crisp crust.".to_string()),
            },
            created_days_ago: 3,
            updated_days_ago: 1,
        },
        SampleProduct {
            details: ProductDetails {
                name: "Whole Milk 1L".to_string(),
                sku: "MLK-WHL-1L".to_string(),
                category: Category::Dairy,
                price: 1.99,
                stock: 200,
                image: "https://images.unsplash.com/photo-1550583724-b2692b85b150?w=800&q=80&auto=format&fit=crop".to_string(),
                location: "Refrigerated Aisle".to_string(),
                directions: "Back of store, second fridge on left".to_string(),
                description: Some("Rich and creamy whole milk.".to_string()),
            },
            created_days_ago: 5,
            updated_days_ago: 2,
        },
    ]
});

/// Built-in catalog shown when the very first load fails.
///
/// Entries are drafts: they have never been persisted.
pub fn sample_entries(
    now: DateTime<Utc>,
    mut next_key: impl FnMut() -> LocalKey,
) -> Vec<CatalogEntry> {
    SAMPLE_PRODUCTS
        .iter()
        .map(|sample| CatalogEntry {
            identity: Identity::Draft(next_key()),
            details: sample.details.clone(),
            created_at: now - Duration::days(sample.created_days_ago),
            updated_at: now - Duration::days(sample.updated_days_ago),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_draft_samples() {
        let mut counter = 0;
        let entries = sample_entries(Utc::now(), || {
            counter += 1;
            LocalKey::new(counter)
        });

        assert_eq!(entries.len(), 3);
        for entry in &entries {
            assert!(entry.identity.server().is_none());
            assert!(entry.details.validate().is_ok());
            assert!(entry.updated_at >= entry.created_at);
        }
        assert_eq!(entries[2].key(), LocalKey::new(3));
    }
}
