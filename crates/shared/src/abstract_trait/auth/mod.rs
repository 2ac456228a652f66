use crate::{
    config::Claims,
    domain::{
        requests::{AdminLoginRequest, LoginRequest, RegisterRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn register_user(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn login_user(
        &self,
        req: &LoginRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError>;
    async fn login_admin(
        &self,
        req: &AdminLoginRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError>;
    fn verify_token(&self, token: &str) -> Result<Claims, ServiceError>;
}
