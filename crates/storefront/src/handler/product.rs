use axum::{
    Extension, Json, extract::Path, http::StatusCode, response::IntoResponse, routing::get,
};
use shared::{
    abstract_trait::{DynOpinionService, DynProductService},
    domain::responses::{ApiResponse, OpinionResponse, ProductGradeResponse, ProductResponse},
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/opinions",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Opinions about the product", body = ApiResponse<Vec<OpinionResponse>>)
    )
)]
pub async fn get_product_opinions(
    Extension(service): Extension<DynOpinionService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_product(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/grade",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Average opinion grade of the product", body = ApiResponse<ProductGradeResponse>)
    )
)]
pub async fn get_product_grade(
    Extension(service): Extension<DynOpinionService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.product_grade(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products/{id}", get(get_product))
        .route("/api/products/{id}/opinions", get(get_product_opinions))
        .route("/api/products/{id}/grade", get(get_product_grade))
        .layer(Extension(app_state.di_container.product_service.clone()))
        .layer(Extension(app_state.di_container.opinion_service.clone()))
}
