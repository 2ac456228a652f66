use crate::{
    abstract_trait::DiscountRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::DiscountCode,
};
use async_trait::async_trait;
use tracing::error;

pub struct DiscountRepository {
    db: ConnectionPool,
}

impl DiscountRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DiscountRepositoryTrait for DiscountRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<DiscountCode>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, DiscountCode>(
            "SELECT code, discount_percent, admin_id FROM discount_code WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to look up discount code: {err:?}");
            RepositoryError::from(err)
        })
    }
}
