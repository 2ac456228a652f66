use crate::{
    abstract_trait::AdminRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Admin,
};
use async_trait::async_trait;
use tracing::error;

pub struct AdminRepository {
    db: ConnectionPool,
}

impl AdminRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminRepositoryTrait for AdminRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Admin>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, Admin>(
            "SELECT admin_id, username, password FROM admin WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to look up admin '{username}': {err:?}");
            RepositoryError::from(err)
        })
    }
}
