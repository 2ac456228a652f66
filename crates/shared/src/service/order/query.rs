use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::responses::{ApiResponse, OrderLineResponse, OrderResponse},
    errors::{RepositoryError, ServiceError},
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    tracer: ServiceTracer,
}

impl OrderQueryService {
    pub async fn new(query: DynOrderQueryRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let tracer = ServiceTracer::new("order_query_service", registry).await;
        Self { query, tracer }
    }

    async fn lines_of_visible_order(
        &self,
        order_id: i32,
        owner: Option<i32>,
    ) -> Result<Vec<OrderLineResponse>, RepositoryError> {
        let order = self
            .query
            .find_by_id(order_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        if let Some(owner) = owner {
            if order.client_id != owner {
                warn!("⚠️ User {owner} asked for order {order_id} of another user");
                return Err(RepositoryError::NotFound);
            }
        }

        let lines = self.query.find_lines(order_id).await?;
        Ok(lines.into_iter().map(OrderLineResponse::from).collect())
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_by_client(
        &self,
        client_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "find_orders_by_client",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("order.client_id", client_id.to_string()),
            ],
        );

        match self.query.find_by_client(client_id).await {
            Ok(orders) => {
                self.tracer
                    .success(&tracing_ctx, Method::Get, "Fetched order history");
                Ok(ApiResponse::success(
                    "Orders retrieved successfully",
                    orders.into_iter().map(OrderResponse::from).collect(),
                ))
            }
            Err(err) => {
                self.tracer
                    .error(&tracing_ctx, Method::Get, "Failed to fetch order history");
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn find_lines(
        &self,
        order_id: i32,
        owner: Option<i32>,
    ) -> Result<ApiResponse<Vec<OrderLineResponse>>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "find_order_lines",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("order.id", order_id.to_string()),
            ],
        );

        match self.lines_of_visible_order(order_id, owner).await {
            Ok(lines) => {
                self.tracer
                    .success(&tracing_ctx, Method::Get, "Fetched order lines");
                Ok(ApiResponse::success(
                    "Order details retrieved successfully",
                    lines,
                ))
            }
            Err(err) => {
                self.tracer
                    .error(&tracing_ctx, Method::Get, "Failed to fetch order lines");
                Err(ServiceError::Repo(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::OrderQueryRepositoryTrait,
        model::{Order, OrderLine, OrderStatus},
    };
    use chrono::NaiveDate;

    struct FixedOrders;

    fn order(order_id: i32, client_id: i32) -> Order {
        Order {
            order_id,
            client_id,
            created_at: NaiveDate::from_ymd_opt(2025, 3, 1)
                .and_then(|d| d.and_hms_opt(12, 0, 0))
                .unwrap(),
            status: OrderStatus::Packing,
            discount_code: None,
            shipping_address: "Main St".into(),
            shipping_city: "Springfield".into(),
        }
    }

    #[async_trait]
    impl OrderQueryRepositoryTrait for FixedOrders {
        async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
            Ok((id == 1).then(|| order(1, 42)))
        }

        async fn find_by_client(&self, client_id: i32) -> Result<Vec<Order>, RepositoryError> {
            Ok(if client_id == 42 { vec![order(1, 42)] } else { vec![] })
        }

        async fn find_lines(&self, order_id: i32) -> Result<Vec<OrderLine>, RepositoryError> {
            Ok(vec![OrderLine {
                order_id,
                product_id: 7,
                amount: 2,
            }])
        }
    }

    async fn service() -> OrderQueryService {
        let registry = Arc::new(Mutex::new(Registry::default()));
        OrderQueryService::new(Arc::new(FixedOrders), registry).await
    }

    #[tokio::test]
    async fn owners_see_their_order_lines() {
        let lines = service().await.find_lines(1, Some(42)).await.unwrap().data;

        assert_eq!(
            lines,
            vec![OrderLineResponse {
                product_id: 7,
                amount: 2
            }]
        );
    }

    #[tokio::test]
    async fn foreign_orders_look_missing() {
        let service = service().await;

        let err = service.find_lines(1, Some(5)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Repo(RepositoryError::NotFound)));

        // admin lookups skip the ownership check
        assert!(service.find_lines(1, None).await.is_ok());
        assert!(service.find_lines(2, None).await.is_err());
    }
}
