use crate::middleware::{
    jwt::{auth_middleware, user_middleware},
    validate::SimpleValidatedJson,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, put},
};
use shared::{
    abstract_trait::DynCheckoutService,
    config::Claims,
    domain::{
        requests::CheckoutRequest,
        responses::{ApiResponse, CheckoutResponse, OrderLineResponse, OrderResponse},
    },
    errors::HttpError,
    service::OrderService,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    put,
    path = "/api/user/order",
    tag = "Order",
    security(("bearer_auth" = [])),
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Cart converted into an order", body = ApiResponse<CheckoutResponse>),
        (status = 400, description = "Validation error or unknown discount code"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Client role required"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Transaction failed and was rolled back")
    )
)]
pub async fn checkout(
    Extension(service): Extension<DynCheckoutService>,
    Extension(claims): Extension<Claims>,
    SimpleValidatedJson(body): SimpleValidatedJson<CheckoutRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_order(claims.id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/user/orders",
    tag = "Order",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Order history, newest first", body = ApiResponse<Vec<OrderResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_order_history(
    Extension(service): Extension<OrderService>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_client(claims.id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/user/orders/{id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Lines of the order", body = ApiResponse<Vec<OrderLineResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order_details(
    Extension(service): Extension<OrderService>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_lines(id, Some(claims.id)).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/user/order", put(checkout))
        .route("/api/user/orders", get(get_order_history))
        .route("/api/user/orders/{id}", get(get_order_details))
        .route_layer(middleware::from_fn(user_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.checkout_service.clone()))
        .layer(Extension(app_state.di_container.order_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
