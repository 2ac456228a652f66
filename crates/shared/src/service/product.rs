use crate::{
    abstract_trait::{DynProductRepository, ProductServiceTrait},
    domain::responses::{ApiResponse, ProductResponse},
    errors::{RepositoryError, ServiceError},
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct ProductService {
    repository: DynProductRepository,
    tracer: ServiceTracer,
}

impl ProductService {
    pub async fn new(repository: DynProductRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let tracer = ServiceTracer::new("product_service", registry).await;
        Self { repository, tracer }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "find_product",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        match self.repository.find_by_id(id).await {
            Ok(Some(product)) => {
                self.tracer
                    .success(&tracing_ctx, Method::Get, "Fetched product");
                Ok(ApiResponse::success(
                    "Product retrieved successfully",
                    ProductResponse::from(product),
                ))
            }
            Ok(None) => {
                self.tracer
                    .error(&tracing_ctx, Method::Get, "Product not found");
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(err) => {
                self.tracer
                    .error(&tracing_ctx, Method::Get, "Failed to fetch product");
                Err(ServiceError::Repo(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abstract_trait::ProductRepositoryTrait, model::Product};

    struct Catalogue(Vec<Product>);

    #[async_trait]
    impl ProductRepositoryTrait for Catalogue {
        async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
            Ok(self.0.iter().find(|p| p.product_id == id).cloned())
        }
    }

    async fn service() -> ProductService {
        let mug = Product {
            product_id: 7,
            name: "Mug".into(),
            category: "kitchen".into(),
            price: 1500,
            description: None,
            active: true,
        };
        let registry = Arc::new(Mutex::new(Registry::default()));
        ProductService::new(Arc::new(Catalogue(vec![mug])), registry).await
    }

    #[tokio::test]
    async fn known_product_is_returned() {
        let product = service().await.find_by_id(7).await.unwrap().data;
        assert_eq!(product.id, 7);
        assert_eq!(product.price, 1500);
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let err = service().await.find_by_id(8).await.unwrap_err();
        assert!(matches!(err, ServiceError::Repo(RepositoryError::NotFound)));
    }
}
