use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ProductRequest;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MutationResponseData;
use crate::inbound::http::router::AppState;

/// Replace every mutable field of a product.
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    ApiJson(body): ApiJson<ProductRequest>,
) -> Result<ApiSuccess<MutationResponseData>, ApiError> {
    let product_id =
        ProductId::from_string(&product_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let details = body.try_into_details()?;

    state
        .product_service
        .update_product(&product_id, details)
        .await
        .map_err(ApiError::from)
        .map(|rows| {
            ApiSuccess::new(
                StatusCode::OK,
                MutationResponseData::updated(product_id.0, "Product", rows),
            )
        })
}
