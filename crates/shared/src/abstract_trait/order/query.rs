use crate::{
    domain::responses::{ApiResponse, OrderLineResponse, OrderResponse},
    errors::{RepositoryError, ServiceError},
    model::{Order as OrderModel, OrderLine},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError>;
    async fn find_by_client(&self, client_id: i32) -> Result<Vec<OrderModel>, RepositoryError>;
    async fn find_lines(&self, order_id: i32) -> Result<Vec<OrderLine>, RepositoryError>;
}

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_by_client(
        &self,
        client_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    /// Lines of `order_id`; `owner` restricts the lookup to that client's orders.
    async fn find_lines(
        &self,
        order_id: i32,
        owner: Option<i32>,
    ) -> Result<ApiResponse<Vec<OrderLineResponse>>, ServiceError>;
}
