use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::category::models::CategoryId;
use crate::domain::errors::parse_record_id;
use crate::domain::errors::validate_name;
use crate::domain::errors::NameError;
use crate::domain::errors::RecordIdError;
use crate::domain::product::errors::PriceError;
use crate::domain::product::errors::QuantityError;

/// Catalog product.
///
/// `created` and `updated` are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub short_description: String,
    pub description: String,
    pub price: Price,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub quantity: Quantity,
    pub category_id: CategoryId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn from_string(s: &str) -> Result<Self, RecordIdError> {
        parse_record_id(s).map(ProductId)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Product name, trimmed, 1-255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    const MAX_LENGTH: usize = 255;

    pub fn new(name: String) -> Result<Self, NameError> {
        validate_name(name, Self::MAX_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unit price; finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, PriceError> {
        if !value.is_finite() {
            Err(PriceError::NotFinite)
        } else if value < 0.0 {
            Err(PriceError::Negative(value))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Units in stock; non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(i64);

impl Quantity {
    pub fn new(value: i64) -> Result<Self, QuantityError> {
        if value < 0 {
            Err(QuantityError::Negative(value))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Writable attributes of a product, used for both insert and full update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub name: ProductName,
    pub short_description: String,
    pub description: String,
    pub price: Price,
    pub quantity: Quantity,
    pub category_id: CategoryId,
}
