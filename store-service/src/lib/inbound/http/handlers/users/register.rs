use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::errors::NameError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::PersonName;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MutationResponseData;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;

pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<ApiSuccess<MutationResponseData>, ApiError> {
    state
        .user_service
        .register_user(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|user| {
            ApiSuccess::new(
                StatusCode::CREATED,
                MutationResponseData::created(user.id.0, "User"),
            )
        })
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid first name: {0}")]
    FirstName(NameError),

    #[error("Invalid last name: {0}")]
    LastName(NameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseRegisterRequestError> {
        let first_name =
            PersonName::new(self.first_name).map_err(ParseRegisterRequestError::FirstName)?;
        let last_name =
            PersonName::new(self.last_name).map_err(ParseRegisterRequestError::LastName)?;
        let email = EmailAddress::new(self.email)?;
        Ok(RegisterUserCommand::new(
            first_name,
            last_name,
            email,
            self.password,
        ))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(first_name: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            first_name: first_name.to_string(),
            last_name: "Petrovic".to_string(),
            email: email.to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[test]
    fn test_try_into_command() {
        let command = request("Sofija", "sofija@example.com")
            .try_into_command()
            .unwrap();
        assert_eq!(command.first_name.as_str(), "Sofija");
        assert_eq!(command.email.as_str(), "sofija@example.com");
    }

    #[test]
    fn test_try_into_command_rejects_blank_name() {
        assert!(matches!(
            request("  ", "sofija@example.com").try_into_command(),
            Err(ParseRegisterRequestError::FirstName(NameError::Empty))
        ));
    }

    #[test]
    fn test_try_into_command_rejects_bad_email() {
        assert!(matches!(
            request("Sofija", "sofija.example.com").try_into_command(),
            Err(ParseRegisterRequestError::Email(_))
        ));
    }
}
