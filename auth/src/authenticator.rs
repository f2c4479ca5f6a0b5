use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Holds the signing secret (baked into the JWT keys at construction) and the
/// token lifetime. Both are read-only for the lifetime of the process.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,

    /// Absolute expiry of the token (Unix timestamp)
    pub expires_at: i64,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    /// * `token_ttl` - Lifetime of issued tokens
    pub fn new(jwt_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl,
        }
    }

    /// Verify credentials and issue a token for the identity.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `identity` - Identity to embed in the `sub` claim
    /// * `email` - Email to embed in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be parsed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        identity: impl ToString,
        email: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let claims = Claims::for_identity(identity, email, self.token_ttl);
        let access_token = self.jwt_handler.encode(&claims)?;

        Ok(AuthenticationResult {
            access_token,
            expires_at: claims.exp,
        })
    }

    /// Issue a token for the identity without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, identity: impl ToString, email: &str) -> Result<String, JwtError> {
        self.sign(&Claims::for_identity(identity, email, self.token_ttl))
    }

    /// Sign arbitrary claims with the configured secret.
    pub fn sign(&self, claims: &Claims) -> Result<String, JwtError> {
        self.jwt_handler.encode(claims)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    /// * `JwtError` - Signature, algorithm or expiry check failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn authenticator() -> Authenticator {
        Authenticator::new(SECRET, Duration::hours(24))
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let password = "my_password";
        let hash = PasswordHasher::new()
            .hash(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, 42, "alice@example.com")
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());
        assert!(result.expires_at > Utc::now().timestamp());

        let decoded = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded.subject(), "42");
        assert_eq!(decoded.email, "alice@example.com");
        assert_eq!(decoded.exp, result.expires_at);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = PasswordHasher::new().hash("my_password").unwrap();

        let result = authenticator.authenticate("wrong_password", &hash, 42, "alice@example.com");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_issue_and_validate_token() {
        let authenticator = authenticator();

        let token = authenticator
            .issue_token(7, "bob@example.com")
            .expect("Failed to issue token");

        let decoded = authenticator
            .validate_token(&token)
            .expect("Failed to validate token");

        assert_eq!(decoded.subject(), "7");
        assert_eq!(decoded.email, "bob@example.com");
    }

    #[test]
    fn test_validate_token_from_other_secret() {
        let issuer = Authenticator::new(b"another_secret_key_of_32_bytes_min!", Duration::hours(1));
        let token = issuer.issue_token(1, "eve@example.com").unwrap();

        let result = authenticator().validate_token(&token);
        assert_eq!(result, Err(JwtError::InvalidSignature));
    }

    #[test]
    fn test_validate_expired_token() {
        let authenticator = authenticator();
        let claims = Claims::for_identity(42, "alice@example.com", Duration::hours(1))
            .with_expiration(Utc::now().timestamp() - 1);
        let token = authenticator.sign(&claims).unwrap();

        let result = authenticator.validate_token(&token);
        assert_eq!(result, Err(JwtError::TokenExpired));
    }
}
