use crate::{
    abstract_trait::{CartServiceTrait, DynCartRepository},
    domain::{
        requests::AddToCartRequest,
        responses::{ApiResponse, CartItemResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct CartService {
    repository: DynCartRepository,
    tracer: ServiceTracer,
}

impl CartService {
    pub async fn new(repository: DynCartRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let tracer = ServiceTracer::new("cart_service", registry).await;
        Self { repository, tracer }
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn get_cart(
        &self,
        client_id: i32,
    ) -> Result<ApiResponse<Vec<CartItemResponse>>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "get_cart",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("cart.client_id", client_id.to_string()),
            ],
        );

        match self.repository.find_by_client(client_id).await {
            Ok(items) => {
                self.tracer
                    .success(&tracing_ctx, Method::Get, "Fetched cart");
                Ok(ApiResponse::success(
                    "Cart retrieved successfully",
                    items.into_iter().map(CartItemResponse::from).collect(),
                ))
            }
            Err(err) => {
                self.tracer
                    .error(&tracing_ctx, Method::Get, "Failed to fetch cart");
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn add_to_cart(
        &self,
        client_id: i32,
        req: &AddToCartRequest,
    ) -> Result<ApiResponse<()>, ServiceError> {
        info!(
            "🛒 Adding product {} x{} to cart of user {client_id}",
            req.product_id, req.amount
        );

        let tracing_ctx = self.tracer.start(
            "add_to_cart",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("cart.client_id", client_id.to_string()),
                KeyValue::new("cart.product_id", req.product_id.to_string()),
            ],
        );

        match self.repository.add_item(client_id, req).await {
            Ok(_) => {
                self.tracer
                    .success(&tracing_ctx, Method::Post, "Added to cart");
                Ok(ApiResponse::success("Successfully added to cart!", ()))
            }
            Err(RepositoryError::AlreadyExists(_)) => {
                self.tracer
                    .error(&tracing_ctx, Method::Post, "Item already in cart");
                Err(ServiceError::Repo(RepositoryError::Conflict(
                    "Item already in cart".into(),
                )))
            }
            Err(err) => {
                self.tracer
                    .error(&tracing_ctx, Method::Post, "Failed to add to cart");
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn remove_from_cart(
        &self,
        client_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<()>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "remove_from_cart",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("cart.client_id", client_id.to_string()),
                KeyValue::new("cart.product_id", product_id.to_string()),
            ],
        );

        match self.repository.remove_item(client_id, product_id).await {
            Ok(0) => {
                self.tracer
                    .error(&tracing_ctx, Method::Delete, "Item not in cart");
                Err(ServiceError::Validation(vec![format!(
                    "product {product_id} is not in the cart"
                )]))
            }
            Ok(_) => {
                self.tracer
                    .success(&tracing_ctx, Method::Delete, "Removed from cart");
                Ok(ApiResponse::success("Item removed!", ()))
            }
            Err(err) => {
                self.tracer
                    .error(&tracing_ctx, Method::Delete, "Failed to remove from cart");
                Err(ServiceError::Repo(err))
            }
        }
    }
}
