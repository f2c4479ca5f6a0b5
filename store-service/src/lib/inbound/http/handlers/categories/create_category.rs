use axum::extract::State;
use axum::http::StatusCode;

use super::CategoryRequest;
use crate::domain::category::ports::CategoryServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MutationResponseData;
use crate::inbound::http::router::AppState;

pub async fn create_category(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CategoryRequest>,
) -> Result<ApiSuccess<MutationResponseData>, ApiError> {
    state
        .category_service
        .create_category(body.try_into_name()?)
        .await
        .map_err(ApiError::from)
        .map(|category| {
            ApiSuccess::new(
                StatusCode::CREATED,
                MutationResponseData::created(category.id.0, "Category"),
            )
        })
}
