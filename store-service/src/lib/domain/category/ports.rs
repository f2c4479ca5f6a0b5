use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;

/// Port for category domain service operations.
#[async_trait]
pub trait CategoryServicePort: Send + Sync + 'static {
    async fn create_category(&self, name: CategoryName) -> Result<Category, CategoryError>;

    /// # Errors
    /// * `NotFound` - Category does not exist
    async fn get_category(&self, id: &CategoryId) -> Result<Category, CategoryError>;

    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError>;

    /// Rename a category, returning the number of rows affected.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    async fn update_category(
        &self,
        id: &CategoryId,
        name: CategoryName,
    ) -> Result<u64, CategoryError>;

    /// Delete a category, returning the number of rows affected.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `InUse` - Products still reference the category
    async fn delete_category(&self, id: &CategoryId) -> Result<u64, CategoryError>;
}

/// Persistence operations for categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    async fn create(&self, name: &CategoryName) -> Result<Category, CategoryError>;

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, CategoryError>;

    async fn list_all(&self) -> Result<Vec<Category>, CategoryError>;

    /// Returns the number of rows affected (0 when absent).
    async fn update(&self, id: &CategoryId, name: &CategoryName) -> Result<u64, CategoryError>;

    /// Returns the number of rows affected (0 when absent).
    async fn delete(&self, id: &CategoryId) -> Result<u64, CategoryError>;
}
