use thiserror::Error;

use crate::domain::errors::NameError;
use crate::domain::errors::RecordIdError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceError {
    #[error("Price must be a finite number")]
    NotFinite,

    #[error("Price must not be negative, got {0}")]
    Negative(f64),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuantityError {
    #[error("Quantity must not be negative, got {0}")]
    Negative(i64),
}

/// Top-level error for product operations
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    #[error("Invalid category reference: {0}")]
    InvalidCategoryId(#[from] RecordIdError),

    #[error("Invalid product name: {0}")]
    InvalidName(#[from] NameError),

    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(#[from] QuantityError),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Category does not exist: {0}")]
    UnknownCategory(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
