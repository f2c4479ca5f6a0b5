use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::categories::create_category;
use super::handlers::categories::delete_category;
use super::handlers::categories::get_category;
use super::handlers::categories::list_categories;
use super::handlers::categories::update_category;
use super::handlers::products::create_product;
use super::handlers::products::delete_product;
use super::handlers::products::get_product;
use super::handlers::products::list_products;
use super::handlers::products::update_product;
use super::handlers::users::get_user;
use super::handlers::users::get_user_by_email;
use super::handlers::users::login;
use super::handlers::users::register;
use super::handlers::users::update_user;
use super::middleware::require_owner;
use crate::domain::category::ports::CategoryServicePort;
use crate::domain::product::ports::ProductServicePort;
use crate::domain::user::ports::UserServicePort;

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub product_service: Arc<dyn ProductServicePort>,
    pub category_service: Arc<dyn CategoryServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    product_service: Arc<dyn ProductServicePort>,
    category_service: Arc<dyn CategoryServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        product_service,
        category_service,
        authenticator,
    };

    let product_routes = Router::new()
        .route("/api/product", get(list_products))
        .route("/api/product/:id", get(get_product).put(update_product))
        .route("/api/newproduct", post(create_product))
        .route("/api/deleteproduct/:id", delete(delete_product));

    let category_routes = Router::new()
        .route("/api/category", get(list_categories))
        .route("/api/category/:id", get(get_category).put(update_category))
        .route("/api/newcategory", post(create_category))
        .route("/api/deletecategory/:id", delete(delete_category));

    let public_user_routes = Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/user/:id", get(get_user))
        .route("/api/useremail/:email", get(get_user_by_email));

    let protected_user_routes = Router::new()
        .route("/api/user/:id", put(update_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_owner,
        ));

    // Headers are left out of the span: they carry the access token.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(product_routes)
        .merge(category_routes)
        .merge(public_user_routes)
        .merge(protected_user_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
