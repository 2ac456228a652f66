use crate::{
    domain::{
        requests::UpdateOrderStatusRequest,
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order as OrderModel, OrderStatus},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn update_status(
        &self,
        order_id: i32,
        status: OrderStatus,
    ) -> Result<Option<OrderModel>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn update_status(
        &self,
        order_id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
