use crate::middleware::{
    jwt::{admin_middleware, auth_middleware},
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
    abstract_trait::DynAuthService,
    config::Claims,
    domain::{
        requests::{AdminLoginRequest, LoginRequest, RegisterRequest},
        responses::{
            ApiResponse, MessageResponse, TokenResponse, UserResponse, VerifyTokenResponse,
        },
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = ApiResponse<UserResponse>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already in use")
    ),
    tag = "Auth"
)]
pub async fn register_user_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.register_user(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<TokenResponse>),
        (status = 401, description = "Wrong username or password")
    ),
    tag = "Auth"
)]
pub async fn login_user_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login_user(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/auth/verify-token",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Token is valid", body = VerifyTokenResponse),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "Auth"
)]
pub async fn verify_token_handler(
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, HttpError> {
    Ok((
        StatusCode::OK,
        Json(VerifyTokenResponse {
            valid: true,
            user: claims,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/admin/login",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Admin login successful", body = ApiResponse<TokenResponse>),
        (status = 401, description = "Wrong username or password")
    ),
    tag = "Auth"
)]
pub async fn admin_login_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<AdminLoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login_admin(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/auth/admin/check-token",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Admin token is valid", body = MessageResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not an admin token")
    ),
    tag = "Auth"
)]
pub async fn admin_check_token_handler() -> Result<impl IntoResponse, HttpError> {
    Ok((StatusCode::OK, Json(MessageResponse::new("verified"))))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/auth/register", post(register_user_handler))
        .route("/api/auth/login", post(login_user_handler))
        .route("/api/auth/admin/login", post(admin_login_handler))
        .layer(Extension(app_state.di_container.auth_service.clone()));

    let token_routes = OpenApiRouter::new()
        .route("/api/auth/verify-token", get(verify_token_handler))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.jwt_config.clone()));

    let admin_routes = OpenApiRouter::new()
        .route("/api/auth/admin/check-token", get(admin_check_token_handler))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(token_routes).merge(admin_routes)
}
