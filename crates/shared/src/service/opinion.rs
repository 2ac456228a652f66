use crate::{
    abstract_trait::{DynOpinionRepository, OpinionServiceTrait},
    domain::{
        requests::CreateOpinionRequest,
        responses::{ApiResponse, OpinionResponse, ProductGradeResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct OpinionService {
    repository: DynOpinionRepository,
    tracer: ServiceTracer,
}

impl OpinionService {
    pub async fn new(repository: DynOpinionRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let tracer = ServiceTracer::new("opinion_service", registry).await;
        Self { repository, tracer }
    }
}

#[async_trait]
impl OpinionServiceTrait for OpinionService {
    async fn add_opinion(
        &self,
        client_id: i32,
        req: &CreateOpinionRequest,
    ) -> Result<ApiResponse<OpinionResponse>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "add_opinion",
            vec![
                KeyValue::new("component", "opinion"),
                KeyValue::new("opinion.product_id", req.product_id.to_string()),
                KeyValue::new("opinion.grade", i64::from(req.grade)),
            ],
        );

        match self.repository.create(client_id, req).await {
            Ok(opinion) => {
                self.tracer
                    .success(&tracing_ctx, Method::Post, "Added opinion");
                Ok(ApiResponse::success(
                    "Opinion added successfully",
                    OpinionResponse::from(opinion),
                ))
            }
            Err(RepositoryError::AlreadyExists(_)) => {
                self.tracer
                    .error(&tracing_ctx, Method::Post, "Duplicate opinion");
                Err(ServiceError::Repo(RepositoryError::Conflict(
                    "Opinion for this product from this user already exists".into(),
                )))
            }
            Err(err) => {
                self.tracer
                    .error(&tracing_ctx, Method::Post, "Failed to add opinion");
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<OpinionResponse>>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "find_opinions",
            vec![
                KeyValue::new("component", "opinion"),
                KeyValue::new("opinion.product_id", product_id.to_string()),
            ],
        );

        match self.repository.find_by_product(product_id).await {
            Ok(opinions) => {
                self.tracer
                    .success(&tracing_ctx, Method::Get, "Fetched opinions");
                Ok(ApiResponse::success(
                    "Opinions retrieved successfully",
                    opinions.into_iter().map(OpinionResponse::from).collect(),
                ))
            }
            Err(err) => {
                self.tracer
                    .error(&tracing_ctx, Method::Get, "Failed to fetch opinions");
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn product_grade(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<ProductGradeResponse>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "product_grade",
            vec![
                KeyValue::new("component", "opinion"),
                KeyValue::new("opinion.product_id", product_id.to_string()),
            ],
        );

        match self.repository.grade_of_product(product_id).await {
            Ok(grade) => {
                self.tracer
                    .success(&tracing_ctx, Method::Get, "Computed product grade");
                Ok(ApiResponse::success(
                    "Product grade retrieved successfully",
                    ProductGradeResponse::new(product_id, grade),
                ))
            }
            Err(err) => {
                self.tracer
                    .error(&tracing_ctx, Method::Get, "Failed to compute product grade");
                Err(ServiceError::Repo(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::OpinionRepositoryTrait,
        model::{Opinion, ProductGrade},
    };
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct FakeOpinions {
        rows: StdMutex<Vec<Opinion>>,
    }

    #[async_trait]
    impl OpinionRepositoryTrait for FakeOpinions {
        async fn create(
            &self,
            client_id: i32,
            req: &CreateOpinionRequest,
        ) -> Result<Opinion, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            if rows
                .iter()
                .any(|row| row.client_id == client_id && row.product_id == req.product_id)
            {
                return Err(RepositoryError::AlreadyExists("opinion_pkey".into()));
            }
            let opinion = Opinion {
                product_id: req.product_id,
                client_id,
                opinion: req.opinion.clone(),
                grade: req.grade,
                created_at: None,
            };
            rows.push(opinion.clone());
            Ok(opinion)
        }

        async fn find_by_product(&self, product_id: i32) -> Result<Vec<Opinion>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|row| row.product_id == product_id)
                .cloned()
                .collect())
        }

        async fn grade_of_product(&self, product_id: i32) -> Result<ProductGrade, RepositoryError> {
            let rows = self.rows.lock().unwrap();
            let grades: Vec<i32> = rows
                .iter()
                .filter(|row| row.product_id == product_id)
                .map(|row| row.grade)
                .collect();
            Ok(ProductGrade {
                average_grade: (!grades.is_empty())
                    .then(|| grades.iter().sum::<i32>() as f64 / grades.len() as f64),
                opinion_count: grades.len() as i64,
            })
        }
    }

    fn review(product_id: i32, grade: i32) -> CreateOpinionRequest {
        CreateOpinionRequest {
            product_id,
            opinion: "Sturdy and well packed".into(),
            grade,
        }
    }

    #[tokio::test]
    async fn second_opinion_on_same_product_conflicts() {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let service = OpinionService::new(Arc::new(FakeOpinions::default()), registry).await;

        service.add_opinion(42, &review(7, 5)).await.unwrap();
        let err = service.add_opinion(42, &review(7, 1)).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::Conflict(_))
        ));

        service.add_opinion(43, &review(7, 4)).await.unwrap();
        let opinions = service.find_by_product(7).await.unwrap().data;
        let grades: Vec<i32> = opinions.iter().map(|o| o.grade).collect();
        assert_eq!(grades, vec![5, 4]);
    }

    #[tokio::test]
    async fn product_grade_averages_opinions() {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let service = OpinionService::new(Arc::new(FakeOpinions::default()), registry).await;

        for (client_id, grade) in [(42, 5), (43, 4), (44, 4)] {
            service.add_opinion(client_id, &review(7, grade)).await.unwrap();
        }

        let grade = service.product_grade(7).await.unwrap().data;
        assert_eq!(grade.average_grade, Some(4.33));
        assert_eq!(grade.opinion_count, 3);

        let unrated = service.product_grade(9).await.unwrap().data;
        assert_eq!(unrated.average_grade, None);
        assert_eq!(unrated.opinion_count, 0);
    }
}
