#[cfg(test)]
mod tests;

use crate::{
    abstract_trait::{CheckoutServiceTrait, CheckoutUnitOfWork, DynCheckoutRepository},
    domain::{
        requests::CheckoutRequest,
        responses::{ApiResponse, CheckoutResponse, OrderLineResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderLine},
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Turns a client's cart into an order in a single transaction.
#[derive(Clone)]
pub struct CheckoutService {
    repository: DynCheckoutRepository,
    tracer: ServiceTracer,
}

impl CheckoutService {
    pub async fn new(repository: DynCheckoutRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let tracer = ServiceTracer::new("checkout_service", registry).await;
        Self { repository, tracer }
    }

    /// Runs every step on one unit of work and commits; the first failing step
    /// rolls everything back and its error is returned as is.
    async fn checkout(
        &self,
        client_id: i32,
        discount_code: Option<&str>,
        address: &str,
        city: &str,
    ) -> Result<(Order, Vec<OrderLine>), RepositoryError> {
        let mut uow = self.repository.begin().await?;

        match Self::run_steps(uow.as_mut(), client_id, discount_code, address, city).await {
            Ok(created) => {
                uow.commit().await?;
                Ok(created)
            }
            Err(err) => {
                if let Err(rollback_err) = uow.rollback().await {
                    warn!("⚠️ Rollback of checkout for user {client_id} failed: {rollback_err}");
                }
                Err(err)
            }
        }
    }

    async fn run_steps(
        uow: &mut dyn CheckoutUnitOfWork,
        client_id: i32,
        discount_code: Option<&str>,
        address: &str,
        city: &str,
    ) -> Result<(Order, Vec<OrderLine>), RepositoryError> {
        uow.lock_client(client_id).await?;

        let order = uow
            .insert_order(client_id, discount_code, address, city)
            .await?;

        let lines = uow.copy_cart_lines(order.order_id, client_id).await?;

        let cleared = uow.clear_cart(client_id).await?;
        if cleared != lines.len() as u64 {
            warn!(
                "⚠️ Cleared {cleared} cart rows but copied {} lines for order {}",
                lines.len(),
                order.order_id
            );
        }

        Ok((order, lines))
    }
}

#[async_trait]
impl CheckoutServiceTrait for CheckoutService {
    async fn create_order(
        &self,
        client_id: i32,
        req: &CheckoutRequest,
    ) -> Result<ApiResponse<CheckoutResponse>, ServiceError> {
        info!("🛒 Checking out cart of user {client_id}");

        let method = Method::Put;
        let discount_code = req.discount_code();

        let tracing_ctx = self.tracer.start(
            "create_order",
            vec![
                KeyValue::new("component", "checkout"),
                KeyValue::new("operation", "create_order"),
                KeyValue::new("order.client_id", client_id.to_string()),
                KeyValue::new("order.has_discount", discount_code.is_some()),
            ],
        );

        match self
            .checkout(client_id, discount_code, &req.address, &req.city)
            .await
        {
            Ok((order, lines)) => {
                self.tracer.success(
                    &tracing_ctx,
                    method,
                    &format!("Created order {} with {} lines", order.order_id, lines.len()),
                );

                Ok(ApiResponse::success(
                    "Successfully created order!",
                    CheckoutResponse {
                        order_id: order.order_id,
                        lines: lines.into_iter().map(OrderLineResponse::from).collect(),
                    },
                ))
            }
            Err(err) => {
                error!("❌ Checkout of user {client_id} rolled back: {err}");
                self.tracer
                    .error(&tracing_ctx, method, "Checkout rolled back");
                Err(ServiceError::Repo(err))
            }
        }
    }
}
