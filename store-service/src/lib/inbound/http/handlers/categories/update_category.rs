use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::CategoryRequest;
use crate::domain::category::models::CategoryId;
use crate::domain::category::ports::CategoryServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MutationResponseData;
use crate::inbound::http::router::AppState;

pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    ApiJson(body): ApiJson<CategoryRequest>,
) -> Result<ApiSuccess<MutationResponseData>, ApiError> {
    let category_id =
        CategoryId::from_string(&category_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let name = body.try_into_name()?;

    state
        .category_service
        .update_category(&category_id, name)
        .await
        .map_err(ApiError::from)
        .map(|rows| {
            ApiSuccess::new(
                StatusCode::OK,
                MutationResponseData::updated(category_id.0, "Category", rows),
            )
        })
}
