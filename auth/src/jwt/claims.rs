use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity claims carried by an access token.
///
/// `exp` is an absolute Unix timestamp, never an offset, so a token can be
/// checked without knowing when it was issued.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (identity identifier)
    pub sub: String,

    /// Email of the identity at issuance time
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an identity, valid for `ttl` from now.
    ///
    /// # Arguments
    /// * `identity` - Unique identity identifier (stored in `sub`)
    /// * `email` - Email address of the identity
    /// * `ttl` - Lifetime of the token
    pub fn for_identity(identity: impl ToString, email: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: identity.to_string(),
            email: email.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Replace the expiration with an absolute Unix timestamp.
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_identity() {
        let claims = Claims::for_identity(42, "alice@example.com", Duration::hours(24));

        assert_eq!(claims.subject(), "42");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_expiration_is_absolute() {
        let before = Utc::now().timestamp();
        let claims = Claims::for_identity(1, "a@example.com", Duration::minutes(15));

        assert!(claims.exp >= before + 15 * 60);
        assert!(claims.exp > 15_000);
    }

    #[test]
    fn test_with_expiration() {
        let claims = Claims::for_identity(7, "b@example.com", Duration::hours(1))
            .with_expiration(1234567890);
        assert_eq!(claims.exp, 1234567890);
    }
}
