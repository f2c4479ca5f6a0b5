use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use crate::domain::user::models::PersonName;
use crate::domain::user::models::UpdateUserCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MutationResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// HTTP request body for updating a user profile (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub last_name: String,
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, UserError> {
        Ok(UpdateUserCommand {
            first_name: PersonName::new(self.first_name)?,
            last_name: PersonName::new(self.last_name)?,
        })
    }
}

/// Update the profile of the authenticated owner.
///
/// Only reachable behind the auth gate, which has already matched the path id
/// against the token subject.
pub async fn update_user(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
    ApiJson(req): ApiJson<UpdateUserRequest>,
) -> Result<ApiSuccess<MutationResponseData>, ApiError> {
    let command = req.try_into_command()?;

    state
        .user_service
        .update_user(&authenticated.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|rows| {
            ApiSuccess::new(
                StatusCode::OK,
                MutationResponseData::updated(authenticated.user_id.0, "User", rows),
            )
        })
}
