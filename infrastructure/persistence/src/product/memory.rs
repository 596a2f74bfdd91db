use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

/// Process-local record store, used for development and route tests.
///
/// Listing keeps insertion order.
#[derive(Default)]
pub struct InMemoryProductRepository {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    order: Vec<Uuid>,
    products: HashMap<Uuid, Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.products.get(id).cloned())
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        self.state
            .read()
            .await
            .products
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        if state.products.insert(product.id, product.clone()).is_none() {
            state.order.push(product.id);
        }
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        match state.products.get_mut(&product.id) {
            Some(existing) => {
                *existing = product.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        if state.products.remove(&id).is_some() {
            state.order.retain(|existing| *existing != id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::model::{NewProductProps, ProductDetails};
    use business::domain::product::value_objects::Category;

    fn product(name: &str) -> Product {
        Product::new(NewProductProps {
            details: ProductDetails {
                name: name.to_string(),
                sku: format!("SKU-{}", name),
                category: Category::Home,
                price: 12.5,
                stock: 4,
                image: String::new(),
                location: "Aisle 9".to_string(),
                directions: "End cap".to_string(),
                description: None,
            },
            created_at: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_list_in_insertion_order() {
        let repository = InMemoryProductRepository::new();
        let first = product("Lamp");
        let second = product("Rug");
        repository.create(&first).await.unwrap();
        repository.create(&second).await.unwrap();

        let all = repository.get_all().await.unwrap();

        assert_eq!(
            all.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![first.id, second.id]
        );
    }

    #[tokio::test]
    async fn should_fail_update_of_missing_product() {
        let repository = InMemoryProductRepository::new();

        let result = repository.update(&product("Ghost")).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn should_replace_fields_on_update() {
        let repository = InMemoryProductRepository::new();
        let original = product("Lamp");
        repository.create(&original).await.unwrap();
        let mut details = original.details.clone();
        details.stock = 0;
        let revised = original.revise(details).unwrap();

        repository.update(&revised).await.unwrap();

        let stored = repository.get_by_id(original.id).await.unwrap();
        assert_eq!(stored.details.stock, 0);
        assert_eq!(stored.created_at, original.created_at);
    }

    #[tokio::test]
    async fn should_treat_delete_of_unknown_id_as_success() {
        let repository = InMemoryProductRepository::new();
        let kept = product("Lamp");
        repository.create(&kept).await.unwrap();

        repository.delete(Uuid::new_v4()).await.unwrap();
        repository.delete(kept.id).await.unwrap();
        repository.delete(kept.id).await.unwrap();

        assert!(repository.get_all().await.unwrap().is_empty());
        assert!(matches!(
            repository.get_by_id(kept.id).await,
            Err(RepositoryError::NotFound)
        ));
    }
}
