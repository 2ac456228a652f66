use crate::{
    abstract_trait::{DiscountServiceTrait, DynDiscountRepository},
    domain::responses::MessageResponse,
    errors::ServiceError,
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const CORRECT_CODE: &str = "Correct code";
pub const WRONG_CODE: &str = "Wrong code";

#[derive(Clone)]
pub struct DiscountService {
    repository: DynDiscountRepository,
    tracer: ServiceTracer,
}

impl DiscountService {
    pub async fn new(repository: DynDiscountRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let tracer = ServiceTracer::new("discount_service", registry).await;
        Self { repository, tracer }
    }
}

#[async_trait]
impl DiscountServiceTrait for DiscountService {
    async fn check_code(&self, code: &str) -> Result<MessageResponse, ServiceError> {
        let code = code.trim();
        if code.is_empty() {
            return Ok(MessageResponse::new(WRONG_CODE));
        }

        let tracing_ctx = self
            .tracer
            .start("check_discount_code", vec![KeyValue::new("component", "discount")]);

        match self.repository.find_by_code(code).await {
            Ok(found) => {
                self.tracer
                    .success(&tracing_ctx, Method::Get, "Checked discount code");
                let message = if found.is_some() {
                    CORRECT_CODE
                } else {
                    WRONG_CODE
                };
                Ok(MessageResponse::new(message))
            }
            Err(err) => {
                self.tracer
                    .error(&tracing_ctx, Method::Get, "Failed to check discount code");
                Err(ServiceError::Repo(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abstract_trait::DiscountRepositoryTrait, errors::RepositoryError, model::DiscountCode};

    struct OneCode;

    #[async_trait]
    impl DiscountRepositoryTrait for OneCode {
        async fn find_by_code(&self, code: &str) -> Result<Option<DiscountCode>, RepositoryError> {
            Ok((code == "SPRING10").then(|| DiscountCode {
                code: code.to_string(),
                discount_percent: 10,
                admin_id: Some(1),
            }))
        }
    }

    #[tokio::test]
    async fn reports_whether_code_exists() {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let service = DiscountService::new(Arc::new(OneCode), registry).await;

        assert_eq!(service.check_code("SPRING10").await.unwrap().message, CORRECT_CODE);
        assert_eq!(service.check_code("WINTER").await.unwrap().message, WRONG_CODE);
        assert_eq!(service.check_code(" ").await.unwrap().message, WRONG_CODE);
    }
}
