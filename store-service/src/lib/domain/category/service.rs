use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::category::ports::CategoryRepository;
use crate::domain::category::ports::CategoryServicePort;

pub struct CategoryService<CR>
where
    CR: CategoryRepository,
{
    repository: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CategoryServicePort for CategoryService<CR>
where
    CR: CategoryRepository,
{
    async fn create_category(&self, name: CategoryName) -> Result<Category, CategoryError> {
        let category = self.repository.create(&name).await?;
        tracing::info!(category_id = %category.id, "Category created");
        Ok(category)
    }

    async fn get_category(&self, id: &CategoryId) -> Result<Category, CategoryError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id.to_string()))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        self.repository.list_all().await
    }

    async fn update_category(
        &self,
        id: &CategoryId,
        name: CategoryName,
    ) -> Result<u64, CategoryError> {
        match self.repository.update(id, &name).await? {
            0 => Err(CategoryError::NotFound(id.to_string())),
            rows => Ok(rows),
        }
    }

    async fn delete_category(&self, id: &CategoryId) -> Result<u64, CategoryError> {
        match self.repository.delete(id).await? {
            0 => Err(CategoryError::NotFound(id.to_string())),
            rows => Ok(rows),
        }
    }
}
