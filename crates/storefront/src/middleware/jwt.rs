use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{
    abstract_trait::DynJwtService,
    config::{ACCESS_TOKEN, Claims, Role},
    errors::ErrorResponse,
};
use tracing::warn;

type Rejection = (StatusCode, Json<ErrorResponse>);

fn reject(status: StatusCode, message: &str) -> Rejection {
    (
        status,
        Json(ErrorResponse {
            status: "fail".to_string(),
            message: message.to_string(),
        }),
    )
}

fn bearer_token(req: &Request<Body>) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_value| auth_value.strip_prefix("Bearer "))
        .map(str::to_owned)
}

/// Verifies the access token from the `token` cookie or the bearer header and
/// stores its [`Claims`] in the request extensions.
pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, Rejection> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| bearer_token(&req))
        .ok_or_else(|| {
            reject(
                StatusCode::UNAUTHORIZED,
                "You are not logged in, please provide token",
            )
        })?;

    let claims = jwt.verify_token(&token, ACCESS_TOKEN).map_err(|err| {
        warn!("🔒 Rejected token: {err}");
        reject(StatusCode::UNAUTHORIZED, "Invalid token")
    })?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Requires [`auth_middleware`] to have run first.
pub async fn admin_middleware(
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, Rejection> {
    match req.extensions().get::<Claims>() {
        Some(claims) if claims.role == Role::Admin => Ok(next.run(req).await),
        Some(claims) => {
            warn!("🔒 User {} tried to reach an admin route", claims.id);
            Err(reject(StatusCode::FORBIDDEN, "Admin role required"))
        }
        None => Err(reject(
            StatusCode::UNAUTHORIZED,
            "You are not logged in, please provide token",
        )),
    }
}

/// Requires [`auth_middleware`] to have run first. Admin ids live in their own
/// table, so admin tokens never act as a client.
pub async fn user_middleware(
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, Rejection> {
    match req.extensions().get::<Claims>() {
        Some(claims) if claims.role == Role::User => Ok(next.run(req).await),
        Some(claims) => {
            warn!("🔒 Admin {} tried to reach a client route", claims.id);
            Err(reject(StatusCode::FORBIDDEN, "User role required"))
        }
        None => Err(reject(
            StatusCode::UNAUTHORIZED,
            "You are not logged in, please provide token",
        )),
    }
}
