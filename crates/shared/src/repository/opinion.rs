use crate::{
    abstract_trait::OpinionRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateOpinionRequest, errors::RepositoryError,
    model::{Opinion, ProductGrade},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OpinionRepository {
    db: ConnectionPool,
}

impl OpinionRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OpinionRepositoryTrait for OpinionRepository {
    async fn create(
        &self,
        client_id: i32,
        req: &CreateOpinionRequest,
    ) -> Result<Opinion, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let opinion = sqlx::query_as::<_, Opinion>(
            r#"
            INSERT INTO opinion (product_id, client_id, opinion, grade, created_at)
            VALUES ($1, $2, $3, $4, now())
            RETURNING product_id, client_id, opinion, grade, created_at
            "#,
        )
        .bind(req.product_id)
        .bind(client_id)
        .bind(&req.opinion)
        .bind(req.grade)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to add opinion of user {client_id} on product {}: {err:?}",
                req.product_id
            );
            RepositoryError::from(err)
        })?;

        info!(
            "✅ User {client_id} rated product {} with {}",
            opinion.product_id, opinion.grade
        );
        Ok(opinion)
    }

    async fn find_by_product(&self, product_id: i32) -> Result<Vec<Opinion>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, Opinion>(
            r#"
            SELECT product_id, client_id, opinion, grade, created_at
            FROM opinion
            WHERE product_id = $1
            ORDER BY created_at DESC NULLS LAST
            "#,
        )
        .bind(product_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch opinions of product {product_id}: {err:?}");
            RepositoryError::from(err)
        })
    }

    async fn grade_of_product(&self, product_id: i32) -> Result<ProductGrade, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, ProductGrade>(
            r#"
            SELECT AVG(grade)::float8 AS average_grade, COUNT(*) AS opinion_count
            FROM opinion
            WHERE product_id = $1
            "#,
        )
        .bind(product_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to compute grade of product {product_id}: {err:?}");
            RepositoryError::from(err)
        })
    }
}
