use crate::{
    abstract_trait::{DynOrderCommandRepository, OrderCommandServiceTrait},
    domain::{
        requests::UpdateOrderStatusRequest,
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::OrderStatus,
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    tracer: ServiceTracer,
}

impl OrderCommandService {
    pub async fn new(command: DynOrderCommandRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let tracer = ServiceTracer::new("order_command_service", registry).await;
        Self { command, tracer }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn update_status(
        &self,
        order_id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let method = Method::Put;

        let tracing_ctx = self.tracer.start(
            "update_order_status",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("order.id", order_id.to_string()),
                KeyValue::new("order.status", req.status.clone()),
            ],
        );

        let status = match req.status.parse::<OrderStatus>() {
            Ok(status) => status,
            Err(msg) => {
                self.tracer
                    .error(&tracing_ctx, method, "Unknown order status");
                return Err(ServiceError::Validation(vec![msg]));
            }
        };

        match self.command.update_status(order_id, status).await {
            Ok(Some(order)) => {
                info!("📦 Order {order_id} moved to {status}");
                self.tracer
                    .success(&tracing_ctx, method, "Updated order status");
                Ok(ApiResponse::success(
                    "Order status updated successfully",
                    OrderResponse::from(order),
                ))
            }
            Ok(None) => {
                self.tracer.error(&tracing_ctx, method, "Order not found");
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(err) => {
                self.tracer
                    .error(&tracing_ctx, method, "Failed to update order status");
                Err(ServiceError::Repo(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abstract_trait::OrderCommandRepositoryTrait, model::Order};
    use chrono::Utc;

    struct SingleOrder;

    #[async_trait]
    impl OrderCommandRepositoryTrait for SingleOrder {
        async fn update_status(
            &self,
            order_id: i32,
            status: OrderStatus,
        ) -> Result<Option<Order>, RepositoryError> {
            Ok((order_id == 1).then(|| Order {
                order_id,
                client_id: 42,
                created_at: Utc::now().naive_utc(),
                status,
                discount_code: None,
                shipping_address: "Main St".into(),
                shipping_city: "Springfield".into(),
            }))
        }
    }

    async fn service() -> OrderCommandService {
        let registry = Arc::new(Mutex::new(Registry::default()));
        OrderCommandService::new(Arc::new(SingleOrder), registry).await
    }

    fn status(value: &str) -> UpdateOrderStatusRequest {
        UpdateOrderStatusRequest {
            status: value.to_string(),
        }
    }

    #[tokio::test]
    async fn status_update_returns_updated_order() {
        let response = service().await.update_status(1, &status("Shipped")).await.unwrap();
        assert_eq!(response.data.status, OrderStatus::Shipped);
    }

    #[tokio::test]
    async fn invalid_status_or_order_is_rejected() {
        let service = service().await;

        assert!(matches!(
            service.update_status(1, &status("lost")).await,
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            service.update_status(9, &status("shipped")).await,
            Err(ServiceError::Repo(RepositoryError::NotFound))
        ));
    }
}
