use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Order as OrderModel, OrderLine},
};
use async_trait::async_trait;
use tracing::error;

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT order_id, client_id, created_at, status, discount_code, shipping_address, shipping_city
            FROM "order"
            WHERE order_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch order {id}: {err:?}");
            RepositoryError::from(err)
        })
    }

    async fn find_by_client(&self, client_id: i32) -> Result<Vec<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT order_id, client_id, created_at, status, discount_code, shipping_address, shipping_city
            FROM "order"
            WHERE client_id = $1
            ORDER BY created_at DESC, order_id DESC
            "#,
        )
        .bind(client_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch orders of user {client_id}: {err:?}");
            RepositoryError::from(err)
        })
    }

    async fn find_lines(&self, order_id: i32) -> Result<Vec<OrderLine>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, OrderLine>(
            r#"
            SELECT order_id, product_id, amount
            FROM order_product
            WHERE order_id = $1
            ORDER BY product_id
            "#,
        )
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch lines of order {order_id}: {err:?}");
            RepositoryError::from(err)
        })
    }
}
