use crate::{
    domain::{
        requests::{RegisterRequest, UpdateUserRequest},
        responses::{ApiResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::User,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;
pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    /// `req.password` must already be hashed.
    async fn create_user(&self, req: &RegisterRequest) -> Result<User, RepositoryError>;
    async fn update_user(
        &self,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<Option<User>, RepositoryError>;
}

#[async_trait]
pub trait UserServiceTrait {
    async fn find_me(&self, id: i32) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn update_me(
        &self,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
}
