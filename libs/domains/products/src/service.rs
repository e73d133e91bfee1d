use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFilter, ProductPayload};
use crate::repository::ProductRepository;

/// Service layer for Product operations
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Fetch a product or fail with [`ProductError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_product(&self, input: ProductPayload) -> ProductResult<Product> {
        self.repository.create(input).await
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        match filter {
            ProductFilter::All => self.repository.all().await,
            ProductFilter::Name(name) => self.repository.find_by_name(&name).await,
            ProductFilter::Category(category) => self.repository.find_by_category(category).await,
            ProductFilter::Available(available) => {
                self.repository.find_by_availability(available).await
            }
        }
    }

    /// Persist `product` under `id`, whatever id it carried before.
    #[instrument(skip(self, product))]
    pub async fn update_product(&self, id: i32, mut product: Product) -> ProductResult<Product> {
        product.id = id;
        self.repository.update(product).await
    }

    /// Delete an existing product; a missing id is [`ProductError::NotFound`].
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let product = self.get_product(id).await?;
        self.repository.delete(product.id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn product(id: i32) -> Product {
        Product {
            id,
            name: "Hat".to_string(),
            description: "warm".to_string(),
            price: "19.99".parse().unwrap(),
            available: true,
            category: Category::Cloths,
        }
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find().with(eq(7)).returning(|_| Ok(None));

        let service = ProductService::new(repo);
        assert!(matches!(
            service.get_product(7).await,
            Err(ProductError::NotFound(7))
        ));
    }

    #[tokio::test]
    async fn test_list_dispatches_on_filter() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_category()
            .with(eq(Category::Tools))
            .times(1)
            .returning(|_| Ok(vec![]));
        repo.expect_find_by_name()
            .withf(|name: &str| name == "Hat")
            .times(1)
            .returning(|_| Ok(vec![product(1)]));
        repo.expect_all().never();

        let service = ProductService::new(repo);
        service
            .list_products(ProductFilter::Category(Category::Tools))
            .await
            .unwrap();
        let by_name = service
            .list_products(ProductFilter::Name("Hat".into()))
            .await
            .unwrap();
        assert_eq!(by_name.len(), 1);
    }

    #[tokio::test]
    async fn test_update_pins_path_id() {
        let mut repo = MockProductRepository::new();
        repo.expect_update()
            .withf(|p: &Product| p.id == 5)
            .returning(|p| Ok(p));

        let service = ProductService::new(repo);
        let updated = service.update_product(5, product(999)).await.unwrap();
        assert_eq!(updated.id, 5);
    }

    #[tokio::test]
    async fn test_delete_checks_existence_first() {
        let mut repo = MockProductRepository::new();
        repo.expect_find().with(eq(3)).returning(|_| Ok(None));
        repo.expect_delete().never();

        let service = ProductService::new(repo);
        assert!(matches!(
            service.delete_product(3).await,
            Err(ProductError::NotFound(3))
        ));
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let mut repo = MockProductRepository::new();
        repo.expect_find().returning(|id| Ok(Some(product(id))));
        repo.expect_delete().with(eq(3)).times(1).returning(|_| Ok(true));

        let service = ProductService::new(repo);
        service.delete_product(3).await.unwrap();
    }
}
