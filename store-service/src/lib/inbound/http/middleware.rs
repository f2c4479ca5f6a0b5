use auth::Authenticator;
use auth::JwtError;
use axum::extract::Path;
use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;
use http::HeaderMap;
use http::HeaderName;
use thiserror::Error;

use crate::domain::errors::RecordIdError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Request header carrying the access token.
pub const TOKEN_HEADER: HeaderName = HeaderName::from_static("x-jwt-token");

/// Extension type storing the verified identity in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

/// Reasons the auth gate refuses a request.
#[derive(Debug, Clone, Error)]
pub enum AuthGateError {
    #[error("Missing x-jwt-token header")]
    MissingToken,

    #[error("Malformed x-jwt-token header")]
    MalformedHeader,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(JwtError),

    #[error("Invalid token subject: {0}")]
    InvalidSubject(RecordIdError),

    #[error("Invalid resource identifier: {0}")]
    InvalidResourceId(RecordIdError),

    #[error("Token does not grant access to this resource")]
    Forbidden,

    #[error("Owner lookup failed: {0}")]
    OwnerLookup(UserError),
}

impl From<AuthGateError> for ApiError {
    fn from(err: AuthGateError) -> Self {
        match err {
            AuthGateError::MissingToken
            | AuthGateError::MalformedHeader
            | AuthGateError::TokenExpired
            | AuthGateError::InvalidToken(_)
            | AuthGateError::InvalidSubject(_) => ApiError::Unauthorized(err.to_string()),
            AuthGateError::InvalidResourceId(_) => ApiError::BadRequest(err.to_string()),
            AuthGateError::Forbidden => ApiError::Forbidden(err.to_string()),
            AuthGateError::OwnerLookup(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Auth gate for routes addressing a user-owned resource by `:id`.
///
/// Admits the request only when the token is well-formed, correctly signed,
/// unexpired, and its subject owns the addressed resource. Every other
/// outcome ends the request here.
pub async fn require_owner(
    State(state): State<AppState>,
    Path(resource_id): Path<String>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(req.headers()).inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected request without usable token");
    })?;

    let authenticated = verify_token(&state.authenticator, token).inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected request with invalid token");
    })?;

    let resource_id = UserId::from_string(&resource_id).map_err(AuthGateError::InvalidResourceId)?;

    let owner = match state.user_service.get_user(&resource_id).await {
        Ok(user) => Some(user),
        Err(UserError::NotFound(_)) => None,
        Err(e) => return Err(AuthGateError::OwnerLookup(e).into()),
    };

    check_ownership(&authenticated, owner.as_ref()).inspect_err(|_| {
        tracing::warn!(
            user_id = %authenticated.user_id,
            resource_id = %resource_id,
            "Rejected access to resource owned by another identity"
        );
    })?;

    req.extensions_mut().insert(authenticated);

    Ok(next.run(req).await)
}

/// Read the raw token from the `x-jwt-token` header.
pub fn extract_token(headers: &HeaderMap) -> Result<&str, AuthGateError> {
    let value = headers
        .get(TOKEN_HEADER)
        .ok_or(AuthGateError::MissingToken)?;

    let token = value
        .to_str()
        .map_err(|_| AuthGateError::MalformedHeader)?
        .trim();

    if token.is_empty() {
        return Err(AuthGateError::MalformedHeader);
    }

    Ok(token)
}

/// Verify signature, algorithm and expiry, then extract the identity claim.
pub fn verify_token(
    authenticator: &Authenticator,
    token: &str,
) -> Result<AuthenticatedUser, AuthGateError> {
    let claims = authenticator.validate_token(token).map_err(|e| match e {
        JwtError::TokenExpired => AuthGateError::TokenExpired,
        other => AuthGateError::InvalidToken(other),
    })?;

    let user_id = UserId::from_string(claims.subject()).map_err(AuthGateError::InvalidSubject)?;

    Ok(AuthenticatedUser {
        user_id,
        email: claims.email,
    })
}

/// Compare the verified identity with the owner of the addressed resource.
///
/// A missing owner is a denial.
pub fn check_ownership(
    authenticated: &AuthenticatedUser,
    owner: Option<&User>,
) -> Result<(), AuthGateError> {
    match owner {
        Some(owner) if owner.id == authenticated.user_id => Ok(()),
        _ => Err(AuthGateError::Forbidden),
    }
}
