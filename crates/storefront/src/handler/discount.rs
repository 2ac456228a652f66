use axum::{
    Extension, Json, extract::Query, http::StatusCode, response::IntoResponse, routing::get,
};
use shared::{
    abstract_trait::DynDiscountService,
    domain::{requests::CheckDiscountCode, responses::MessageResponse},
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/discount-codes/check",
    tag = "Discount",
    params(CheckDiscountCode),
    responses(
        (status = 200, description = "\"Correct code\" or \"Wrong code\"", body = MessageResponse)
    )
)]
pub async fn check_code(
    Extension(service): Extension<DynDiscountService>,
    Query(params): Query<CheckDiscountCode>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.check_code(&params.code).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn discount_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/discount-codes/check", get(check_code))
        .layer(Extension(app_state.di_container.discount_service.clone()))
}
