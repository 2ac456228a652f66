use crate::{
    domain::{
        requests::AddToCartRequest,
        responses::{ApiResponse, CartItemResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{CartEntry, CartEntryWithProduct},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCartRepository = Arc<dyn CartRepositoryTrait + Send + Sync>;
pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartRepositoryTrait {
    async fn find_by_client(
        &self,
        client_id: i32,
    ) -> Result<Vec<CartEntryWithProduct>, RepositoryError>;
    async fn add_item(
        &self,
        client_id: i32,
        req: &AddToCartRequest,
    ) -> Result<CartEntry, RepositoryError>;
    /// Returns the number of removed rows.
    async fn remove_item(&self, client_id: i32, product_id: i32) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait CartServiceTrait {
    async fn get_cart(
        &self,
        client_id: i32,
    ) -> Result<ApiResponse<Vec<CartItemResponse>>, ServiceError>;
    async fn add_to_cart(
        &self,
        client_id: i32,
        req: &AddToCartRequest,
    ) -> Result<ApiResponse<()>, ServiceError>;
    async fn remove_from_cart(
        &self,
        client_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<()>, ServiceError>;
}
