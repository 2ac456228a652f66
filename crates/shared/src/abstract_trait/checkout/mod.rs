use crate::{
    domain::{requests::CheckoutRequest, responses::{ApiResponse, CheckoutResponse}},
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderLine},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCheckoutRepository = Arc<dyn CheckoutRepositoryTrait + Send + Sync>;
pub type DynCheckoutService = Arc<dyn CheckoutServiceTrait + Send + Sync>;

/// One open checkout transaction.
///
/// Dropping a unit of work without calling [`CheckoutUnitOfWork::commit`]
/// discards every change made through it.
#[async_trait]
pub trait CheckoutUnitOfWork: Send {
    /// Locks the client's row until the unit of work ends.
    /// Fails with [`RepositoryError::NotFound`] for an unknown client.
    async fn lock_client(&mut self, client_id: i32) -> Result<(), RepositoryError>;

    async fn insert_order(
        &mut self,
        client_id: i32,
        discount_code: Option<&str>,
        address: &str,
        city: &str,
    ) -> Result<Order, RepositoryError>;

    /// Copies the client's current cart into `order_product` rows of `order_id`.
    async fn copy_cart_lines(
        &mut self,
        order_id: i32,
        client_id: i32,
    ) -> Result<Vec<OrderLine>, RepositoryError>;

    async fn clear_cart(&mut self, client_id: i32) -> Result<u64, RepositoryError>;

    async fn commit(self: Box<Self>) -> Result<(), RepositoryError>;

    async fn rollback(self: Box<Self>) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait CheckoutRepositoryTrait {
    async fn begin(&self) -> Result<Box<dyn CheckoutUnitOfWork>, RepositoryError>;
}

#[async_trait]
pub trait CheckoutServiceTrait {
    async fn create_order(
        &self,
        client_id: i32,
        req: &CheckoutRequest,
    ) -> Result<ApiResponse<CheckoutResponse>, ServiceError>;
}
