use crate::{
    abstract_trait::{
        AuthServiceTrait, DynAdminRepository, DynHashing, DynJwtService, DynUserRepository,
    },
    config::{ACCESS_TOKEN, Claims, Role},
    domain::{
        requests::{AdminLoginRequest, LoginRequest, RegisterRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AuthService {
    hash: DynHashing,
    jwt: DynJwtService,
    users: DynUserRepository,
    admins: DynAdminRepository,
    tracer: ServiceTracer,
}

pub struct AuthServiceDeps {
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub users: DynUserRepository,
    pub admins: DynAdminRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl AuthService {
    pub async fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps {
            hash,
            jwt,
            users,
            admins,
            registry,
        } = deps;

        let tracer = ServiceTracer::new("auth_service", registry).await;

        Self {
            hash,
            jwt,
            users,
            admins,
            tracer,
        }
    }

    async fn authenticate_user(&self, req: &LoginRequest) -> Result<String, ServiceError> {
        let user = self
            .users
            .find_by_email(&req.username)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hash
            .compare_password(&user.password, &req.password)
            .await?;

        self.jwt
            .generate_token(user.user_id, &user.email, Role::User, ACCESS_TOKEN)
    }

    async fn authenticate_admin(&self, req: &AdminLoginRequest) -> Result<String, ServiceError> {
        let admin = self
            .admins
            .find_by_username(&req.username)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hash
            .compare_password(&admin.password, &req.password)
            .await?;

        self.jwt
            .generate_token(admin.admin_id, &admin.username, Role::Admin, ACCESS_TOKEN)
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register_user(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("📝 Registering new account");

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "register_user",
            vec![
                KeyValue::new("component", "auth"),
                KeyValue::new("operation", "register"),
            ],
        );

        let hashed = match self.hash.hash_password(&req.password).await {
            Ok(hashed) => hashed,
            Err(err) => {
                self.tracer
                    .error(&tracing_ctx, method, "Failed to hash password");
                return Err(err);
            }
        };

        let new_user = RegisterRequest {
            password: hashed,
            ..req.clone()
        };

        match self.users.create_user(&new_user).await {
            Ok(user) => {
                self.tracer
                    .success(&tracing_ctx, method, "Registered user");
                Ok(ApiResponse::success(
                    "Successfully created account!",
                    UserResponse::from(user),
                ))
            }
            Err(RepositoryError::AlreadyExists(_)) => {
                self.tracer
                    .error(&tracing_ctx, method, "Email already in use");
                Err(ServiceError::Repo(RepositoryError::Conflict(
                    "Email already in use. Please use a different email address.".into(),
                )))
            }
            Err(err) => {
                self.tracer
                    .error(&tracing_ctx, method, "Failed to register user");
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn login_user(
        &self,
        req: &LoginRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "login_user",
            vec![
                KeyValue::new("component", "auth"),
                KeyValue::new("operation", "login"),
            ],
        );

        match self.authenticate_user(req).await {
            Ok(token) => {
                self.tracer
                    .success(&tracing_ctx, Method::Post, "User logged in");
                Ok(ApiResponse::success(
                    "Successfully logged in!",
                    TokenResponse { token },
                ))
            }
            Err(err) => {
                warn!("🔒 Login rejected: {err}");
                self.tracer.error(&tracing_ctx, Method::Post, "Login failed");
                Err(err)
            }
        }
    }

    async fn login_admin(
        &self,
        req: &AdminLoginRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "login_admin",
            vec![
                KeyValue::new("component", "auth"),
                KeyValue::new("operation", "admin_login"),
            ],
        );

        match self.authenticate_admin(req).await {
            Ok(token) => {
                self.tracer
                    .success(&tracing_ctx, Method::Post, "Admin logged in");
                Ok(ApiResponse::success(
                    "Successfully logged in!",
                    TokenResponse { token },
                ))
            }
            Err(err) => {
                warn!("🔒 Admin login rejected: {err}");
                self.tracer
                    .error(&tracing_ctx, Method::Post, "Admin login failed");
                Err(err)
            }
        }
    }

    fn verify_token(&self, token: &str) -> Result<Claims, ServiceError> {
        self.jwt.verify_token(token, ACCESS_TOKEN)
    }
}
