use crate::middleware::{
    jwt::{auth_middleware, user_middleware},
    validate::SimpleValidatedJson,
};
use axum::{
    Extension, Json,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::{DynOpinionService, DynUserService},
    config::Claims,
    domain::{
        requests::{CreateOpinionRequest, UpdateUserRequest},
        responses::{ApiResponse, OpinionResponse, UserResponse},
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/user/me",
    tag = "User",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile of the logged in user", body = ApiResponse<UserResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_me(
    Extension(service): Extension<DynUserService>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_me(claims.id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/user/me",
    tag = "User",
    security(("bearer_auth" = [])),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<UserResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Failed to update user data")
    )
)]
pub async fn update_me(
    Extension(service): Extension<DynUserService>,
    Extension(claims): Extension<Claims>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_me(claims.id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/user/opinions",
    tag = "User",
    security(("bearer_auth" = [])),
    request_body = CreateOpinionRequest,
    responses(
        (status = 200, description = "Opinion added", body = ApiResponse<OpinionResponse>),
        (status = 400, description = "Validation error or unknown product"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Opinion already exists")
    )
)]
pub async fn add_opinion(
    Extension(service): Extension<DynOpinionService>,
    Extension(claims): Extension<Claims>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOpinionRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.add_opinion(claims.id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/user/me", get(get_me).put(update_me))
        .route("/api/user/opinions", post(add_opinion))
        .route_layer(middleware::from_fn(user_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.user_service.clone()))
        .layer(Extension(app_state.di_container.opinion_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
