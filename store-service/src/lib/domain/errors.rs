use thiserror::Error;

/// Error for numeric record identifier parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordIdError {
    #[error("Invalid identifier format: {0}")]
    InvalidFormat(String),

    #[error("Identifier must be positive, got {0}")]
    NotPositive(i64),
}

/// Parse a path segment into a positive database identifier.
pub(crate) fn parse_record_id(s: &str) -> Result<i64, RecordIdError> {
    let id = s
        .trim()
        .parse::<i64>()
        .map_err(|e| RecordIdError::InvalidFormat(format!("{:?}: {}", s, e)))?;

    positive_record_id(id)
}

pub(crate) fn positive_record_id(id: i64) -> Result<i64, RecordIdError> {
    if id > 0 {
        Ok(id)
    } else {
        Err(RecordIdError::NotPositive(id))
    }
}

/// Error for free-text record names (product and category names)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Validate a record name: trimmed, non-empty and at most `max` characters.
pub(crate) fn validate_name(name: String, max: usize) -> Result<String, NameError> {
    let trimmed = name.trim();
    let length = trimmed.chars().count();

    if length == 0 {
        Err(NameError::Empty)
    } else if length > max {
        Err(NameError::TooLong {
            max,
            actual: length,
        })
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_id() {
        assert_eq!(parse_record_id("42"), Ok(42));
        assert!(matches!(
            parse_record_id("abc"),
            Err(RecordIdError::InvalidFormat(_))
        ));
        assert_eq!(parse_record_id("0"), Err(RecordIdError::NotPositive(0)));
        assert_eq!(parse_record_id("-3"), Err(RecordIdError::NotPositive(-3)));
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("  apple ".to_string(), 10), Ok("apple".to_string()));
        assert_eq!(validate_name("   ".to_string(), 10), Err(NameError::Empty));
        assert_eq!(
            validate_name("abcdef".to_string(), 5),
            Err(NameError::TooLong { max: 5, actual: 6 })
        );
    }
}
