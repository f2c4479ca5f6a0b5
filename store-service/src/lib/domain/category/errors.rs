use thiserror::Error;

use crate::domain::errors::NameError;
use crate::domain::errors::RecordIdError;

/// Top-level error for category operations
#[derive(Debug, Clone, Error)]
pub enum CategoryError {
    #[error("Invalid category ID: {0}")]
    InvalidCategoryId(#[from] RecordIdError),

    #[error("Invalid category name: {0}")]
    InvalidName(#[from] NameError),

    #[error("Category not found: {0}")]
    NotFound(String),

    #[error("Category {0} is still referenced by products")]
    InUse(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
