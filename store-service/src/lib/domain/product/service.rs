use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDetails;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductRepository;
use crate::domain::product::ports::ProductServicePort;

/// Domain service implementation for product operations.
pub struct ProductService<PR>
where
    PR: ProductRepository,
{
    repository: Arc<PR>,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> ProductServicePort for ProductService<PR>
where
    PR: ProductRepository,
{
    async fn create_product(&self, details: ProductDetails) -> Result<Product, ProductError> {
        let product = self.repository.create(&details).await?;
        tracing::info!(product_id = %product.id, category_id = %product.category_id, "Product created");
        Ok(product)
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id.to_string()))
    }

    async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.repository.list_all().await
    }

    async fn update_product(
        &self,
        id: &ProductId,
        details: ProductDetails,
    ) -> Result<u64, ProductError> {
        match self.repository.update(id, &details).await? {
            0 => Err(ProductError::NotFound(id.to_string())),
            rows => Ok(rows),
        }
    }

    async fn delete_product(&self, id: &ProductId) -> Result<u64, ProductError> {
        match self.repository.delete(id).await? {
            0 => Err(ProductError::NotFound(id.to_string())),
            rows => Ok(rows),
        }
    }
}
