use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Order as OrderModel, OrderStatus},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn update_status(
        &self,
        order_id: i32,
        status: OrderStatus,
    ) -> Result<Option<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, OrderModel>(
            r#"
            UPDATE "order"
            SET status = $2
            WHERE order_id = $1
            RETURNING order_id, client_id, created_at, status, discount_code, shipping_address, shipping_city
            "#,
        )
        .bind(order_id)
        .bind(status)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to set status of order {order_id} to {status}: {err:?}");
            RepositoryError::from(err)
        })?;

        if result.is_some() {
            info!("✅ Order {order_id} is now {status}");
        }
        Ok(result)
    }
}
