use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDetails;
use crate::domain::product::models::ProductId;

/// Port for product domain service operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// Create a product.
    ///
    /// # Errors
    /// * `UnknownCategory` - Referenced category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_product(&self, details: ProductDetails) -> Result<Product, ProductError>;

    /// # Errors
    /// * `NotFound` - Product does not exist
    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductError>;

    async fn list_products(&self) -> Result<Vec<Product>, ProductError>;

    /// Replace the writable attributes of a product.
    ///
    /// # Returns
    /// Number of rows affected
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `UnknownCategory` - Referenced category does not exist
    async fn update_product(
        &self,
        id: &ProductId,
        details: ProductDetails,
    ) -> Result<u64, ProductError>;

    /// # Returns
    /// Number of rows affected
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    async fn delete_product(&self, id: &ProductId) -> Result<u64, ProductError>;
}

/// Persistence operations for products.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    async fn create(&self, details: &ProductDetails) -> Result<Product, ProductError>;

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError>;

    async fn list_all(&self) -> Result<Vec<Product>, ProductError>;

    /// Returns the number of rows affected (0 when absent).
    async fn update(&self, id: &ProductId, details: &ProductDetails) -> Result<u64, ProductError>;

    /// Returns the number of rows affected (0 when absent).
    async fn delete(&self, id: &ProductId) -> Result<u64, ProductError>;
}
