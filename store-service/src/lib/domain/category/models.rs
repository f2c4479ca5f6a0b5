use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::errors::parse_record_id;
use crate::domain::errors::positive_record_id;
use crate::domain::errors::validate_name;
use crate::domain::errors::NameError;
use crate::domain::errors::RecordIdError;

/// Product category.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> Result<Self, RecordIdError> {
        positive_record_id(id).map(CategoryId)
    }

    pub fn from_string(s: &str) -> Result<Self, RecordIdError> {
        parse_record_id(s).map(CategoryId)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Category name, trimmed, 1-255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    const MAX_LENGTH: usize = 255;

    pub fn new(name: String) -> Result<Self, NameError> {
        validate_name(name, Self::MAX_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
