use crate::{
    abstract_trait::UserRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{RegisterRequest, UpdateUserRequest},
    errors::RepositoryError,
    model::User,
};
use async_trait::async_trait;
use tracing::{error, info};

const USER_COLUMNS: &str =
    "user_id, first_name, last_name, email, address, address_city, birth_date, password";

pub struct UserRepository {
    db: ConnectionPool,
}

impl UserRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(r#"SELECT {USER_COLUMNS} FROM "user" WHERE user_id = $1"#);
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch user {id}: {err:?}");
                RepositoryError::from(err)
            })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(r#"SELECT {USER_COLUMNS} FROM "user" WHERE email = $1 LIMIT 1"#);
        sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch user by email: {err:?}");
                RepositoryError::from(err)
            })
    }

    async fn create_user(&self, req: &RegisterRequest) -> Result<User, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            INSERT INTO "user" (first_name, last_name, email, address, address_city, birth_date, password)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {USER_COLUMNS}
            "#
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(&req.first_name)
            .bind(&req.last_name)
            .bind(&req.email)
            .bind(&req.address)
            .bind(&req.address_city)
            .bind(req.birth_date)
            .bind(&req.password)
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to create user: {err:?}");
                RepositoryError::from(err)
            })?;

        info!("✅ Created user {}", user.user_id);
        Ok(user)
    }

    async fn update_user(
        &self,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            UPDATE "user"
            SET first_name = $2,
                last_name = $3,
                address = $4,
                address_city = $5
            WHERE user_id = $1
            RETURNING {USER_COLUMNS}
            "#
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(&req.first_name)
            .bind(&req.last_name)
            .bind(&req.address)
            .bind(&req.address_city)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update user {id}: {err:?}");
                RepositoryError::from(err)
            })
    }
}
