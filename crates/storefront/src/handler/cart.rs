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
    routing::{delete, get},
};
use shared::{
    abstract_trait::DynCartService,
    config::Claims,
    domain::{
        requests::AddToCartRequest,
        responses::{ApiResponse, CartItemResponse},
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/user/cart",
    tag = "Cart",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Items in the cart", body = ApiResponse<Vec<CartItemResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_cart(
    Extension(service): Extension<DynCartService>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_cart(claims.id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/user/cart",
    tag = "Cart",
    security(("bearer_auth" = [])),
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Added to cart"),
        (status = 400, description = "Validation error or unknown product"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Item already in cart")
    )
)]
pub async fn add_to_cart(
    Extension(service): Extension<DynCartService>,
    Extension(claims): Extension<Claims>,
    SimpleValidatedJson(body): SimpleValidatedJson<AddToCartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.add_to_cart(claims.id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/user/cart/{product_id}",
    tag = "Cart",
    security(("bearer_auth" = [])),
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Item removed"),
        (status = 400, description = "Item was not in the cart"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn remove_from_cart(
    Extension(service): Extension<DynCartService>,
    Extension(claims): Extension<Claims>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.remove_from_cart(claims.id, product_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn cart_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/user/cart", get(get_cart).post(add_to_cart))
        .route("/api/user/cart/{product_id}", delete(remove_from_cart))
        .route_layer(middleware::from_fn(user_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.cart_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
