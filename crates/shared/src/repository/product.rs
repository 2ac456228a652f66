use crate::{
    abstract_trait::ProductRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use tracing::error;

pub struct ProductRepository {
    db: ConnectionPool,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, name, category, price, description, active
            FROM product
            WHERE product_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch product {id}: {err:?}");
            RepositoryError::from(err)
        })
    }
}
