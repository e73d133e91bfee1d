use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Category, Product, ProductPayload};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product; the repository assigns the id
    async fn create(&self, input: ProductPayload) -> ProductResult<Product>;

    async fn find(&self, id: i32) -> ProductResult<Option<Product>>;

    async fn all(&self) -> ProductResult<Vec<Product>>;

    /// Products whose name equals `name` exactly
    async fn find_by_name(&self, name: &str) -> ProductResult<Vec<Product>>;

    async fn find_by_category(&self, category: Category) -> ProductResult<Vec<Product>>;

    async fn find_by_availability(&self, available: bool) -> ProductResult<Vec<Product>>;

    /// Overwrite the stored row with `product.id`
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Returns `false` when nothing was deleted
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    last_id: i32,
    products: BTreeMap<i32, Product>,
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Ids start at 1 and are never reused. Listings come back in id order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn select(&self, predicate: impl Fn(&Product) -> bool) -> Vec<Product> {
        let store = self.store.read().await;
        store
            .products
            .values()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: ProductPayload) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let product = Product::new(store.last_id, input);
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn find(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.select(|_| true).await)
    }

    async fn find_by_name(&self, name: &str) -> ProductResult<Vec<Product>> {
        Ok(self.select(|p| p.name == name).await)
    }

    async fn find_by_category(&self, category: Category) -> ProductResult<Vec<Product>> {
        Ok(self.select(|p| p.category == category).await)
    }

    async fn find_by_availability(&self, available: bool) -> ProductResult<Vec<Product>> {
        Ok(self.select(|p| p.available == available).await)
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let slot = store
            .products
            .get_mut(&product.id)
            .ok_or(ProductError::NotFound(product.id))?;
        *slot = product.clone();

        tracing::info!(product_id = product.id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
