pub mod create_category;
pub mod delete_category;
pub mod get_category;
pub mod list_categories;
pub mod update_category;

pub use create_category::create_category;
pub use delete_category::delete_category;
pub use get_category::get_category;
pub use list_categories::list_categories;
pub use update_category::update_category;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryName;

/// HTTP request body for creating or renaming a category (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRequest {
    category_name: String,
}

impl CategoryRequest {
    fn try_into_name(self) -> Result<CategoryName, CategoryError> {
        CategoryName::new(self.category_name).map_err(CategoryError::from)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryData {
    pub category_id: i64,
    pub category_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Category> for CategoryData {
    fn from(category: &Category) -> Self {
        Self {
            category_id: category.id.0,
            category_name: category.name.as_str().to_string(),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
