use crate::{
    domain::responses::MessageResponse,
    errors::{RepositoryError, ServiceError},
    model::DiscountCode,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynDiscountRepository = Arc<dyn DiscountRepositoryTrait + Send + Sync>;
pub type DynDiscountService = Arc<dyn DiscountServiceTrait + Send + Sync>;

#[async_trait]
pub trait DiscountRepositoryTrait {
    async fn find_by_code(&self, code: &str) -> Result<Option<DiscountCode>, RepositoryError>;
}

#[async_trait]
pub trait DiscountServiceTrait {
    async fn check_code(&self, code: &str) -> Result<MessageResponse, ServiceError>;
}
