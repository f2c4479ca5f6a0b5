use axum::extract::State;
use axum::http::StatusCode;

use super::ProductRequest;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MutationResponseData;
use crate::inbound::http::router::AppState;

pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ProductRequest>,
) -> Result<ApiSuccess<MutationResponseData>, ApiError> {
    state
        .product_service
        .create_product(body.try_into_details()?)
        .await
        .map_err(ApiError::from)
        .map(|product| {
            ApiSuccess::new(
                StatusCode::CREATED,
                MutationResponseData::created(product.id.0, "Product"),
            )
        })
}
