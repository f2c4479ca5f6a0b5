use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::category::models::CategoryId;
use crate::domain::category::ports::CategoryServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MutationResponseData;
use crate::inbound::http::router::AppState;

/// Delete a category. Categories still referenced by products are refused
/// with 409.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<ApiSuccess<MutationResponseData>, ApiError> {
    let category_id =
        CategoryId::from_string(&category_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .category_service
        .delete_category(&category_id)
        .await
        .map_err(ApiError::from)
        .map(|rows| {
            ApiSuccess::new(
                StatusCode::OK,
                MutationResponseData::deleted(category_id.0, "Category", rows),
            )
        })
}
