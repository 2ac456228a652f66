use crate::{
    abstract_trait::CartRepositoryTrait,
    config::ConnectionPool,
    domain::requests::AddToCartRequest,
    errors::RepositoryError,
    model::{CartEntry, CartEntryWithProduct},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct CartRepository {
    db: ConnectionPool,
}

impl CartRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartRepositoryTrait for CartRepository {
    async fn find_by_client(
        &self,
        client_id: i32,
    ) -> Result<Vec<CartEntryWithProduct>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, CartEntryWithProduct>(
            r#"
            SELECT c.product_id, c.amount, p.name, p.price
            FROM products_in_carts c
            JOIN product p ON p.product_id = c.product_id
            WHERE c.client_id = $1
            ORDER BY c.product_id
            "#,
        )
        .bind(client_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch cart of user {client_id}: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(rows)
    }

    async fn add_item(
        &self,
        client_id: i32,
        req: &AddToCartRequest,
    ) -> Result<CartEntry, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let entry = sqlx::query_as::<_, CartEntry>(
            r#"
            INSERT INTO products_in_carts (client_id, product_id, amount)
            VALUES ($1, $2, $3)
            RETURNING client_id, product_id, amount
            "#,
        )
        .bind(client_id)
        .bind(req.product_id)
        .bind(req.amount)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to add product {} to cart of user {client_id}: {err:?}",
                req.product_id
            );
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Added product {} x{} to cart of user {client_id}",
            entry.product_id, entry.amount
        );
        Ok(entry)
    }

    async fn remove_item(&self, client_id: i32, product_id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result =
            sqlx::query("DELETE FROM products_in_carts WHERE client_id = $1 AND product_id = $2")
                .bind(client_id)
                .bind(product_id)
                .execute(&mut *conn)
                .await
                .map_err(|err| {
                    error!(
                        "❌ Failed to remove product {product_id} from cart of user {client_id}: {err:?}"
                    );
                    RepositoryError::from(err)
                })?;

        Ok(result.rows_affected())
    }
}
