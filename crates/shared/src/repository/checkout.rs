use crate::{
    abstract_trait::{CheckoutRepositoryTrait, CheckoutUnitOfWork},
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Order, OrderLine},
};
use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use tracing::{error, info};

/// Opens checkout transactions on the shared pool.
pub struct CheckoutRepository {
    db: ConnectionPool,
}

impl CheckoutRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CheckoutRepositoryTrait for CheckoutRepository {
    async fn begin(&self) -> Result<Box<dyn CheckoutUnitOfWork>, RepositoryError> {
        let tx = self.db.begin().await.map_err(|err| {
            error!("❌ Failed to begin checkout transaction: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(Box::new(PgCheckoutUnitOfWork { tx }))
    }
}

/// Checkout steps bound to one PostgreSQL transaction.
///
/// `sqlx` rolls the transaction back when it is dropped without a commit.
pub struct PgCheckoutUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl CheckoutUnitOfWork for PgCheckoutUnitOfWork {
    async fn lock_client(&mut self, client_id: i32) -> Result<(), RepositoryError> {
        let locked: Option<i32> =
            sqlx::query_scalar(r#"SELECT user_id FROM "user" WHERE user_id = $1 FOR UPDATE"#)
                .bind(client_id)
                .fetch_optional(&mut *self.tx)
                .await
                .map_err(|err| {
                    error!("❌ Failed to lock user {client_id}: {err:?}");
                    RepositoryError::from(err)
                })?;

        match locked {
            Some(_) => Ok(()),
            None => {
                error!("❌ Checkout for unknown user {client_id}");
                Err(RepositoryError::NotFound)
            }
        }
    }

    async fn insert_order(
        &mut self,
        client_id: i32,
        discount_code: Option<&str>,
        address: &str,
        city: &str,
    ) -> Result<Order, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO "order" (client_id, created_at, status, discount_code, shipping_address, shipping_city)
            VALUES ($1, now(), 'packing', $2, $3, $4)
            RETURNING order_id, client_id, created_at, status, discount_code, shipping_address, shipping_city
            "#,
        )
        .bind(client_id)
        .bind(discount_code)
        .bind(address)
        .bind(city)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to insert order for user {client_id}: {err:?}");
            RepositoryError::from(err)
        })?;

        info!("✅ Inserted order {} for user {client_id}", order.order_id);
        Ok(order)
    }

    async fn copy_cart_lines(
        &mut self,
        order_id: i32,
        client_id: i32,
    ) -> Result<Vec<OrderLine>, RepositoryError> {
        let mut lines = sqlx::query_as::<_, OrderLine>(
            r#"
            INSERT INTO order_product (order_id, product_id, amount)
            SELECT $1, product_id, amount
            FROM products_in_carts
            WHERE client_id = $2
            RETURNING order_id, product_id, amount
            "#,
        )
        .bind(order_id)
        .bind(client_id)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to copy cart of user {client_id} into order {order_id}: {err:?}");
            RepositoryError::from(err)
        })?;

        lines.sort_by_key(|line| line.product_id);

        info!("✅ Copied {} cart lines into order {order_id}", lines.len());
        Ok(lines)
    }

    async fn clear_cart(&mut self, client_id: i32) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM products_in_carts WHERE client_id = $1")
            .bind(client_id)
            .execute(&mut *self.tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to clear cart of user {client_id}: {err:?}");
                RepositoryError::from(err)
            })?;

        Ok(result.rows_affected())
    }

    async fn commit(self: Box<Self>) -> Result<(), RepositoryError> {
        let this = *self;
        this.tx.commit().await.map_err(|err| {
            error!("❌ Failed to commit checkout: {err:?}");
            RepositoryError::from(err)
        })
    }

    async fn rollback(self: Box<Self>) -> Result<(), RepositoryError> {
        let this = *self;
        this.tx.rollback().await.map_err(RepositoryError::from)
    }
}
