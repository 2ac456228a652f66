use crate::{
    domain::{
        requests::CreateOpinionRequest,
        responses::{ApiResponse, OpinionResponse, ProductGradeResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Opinion, ProductGrade},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOpinionRepository = Arc<dyn OpinionRepositoryTrait + Send + Sync>;
pub type DynOpinionService = Arc<dyn OpinionServiceTrait + Send + Sync>;

#[async_trait]
pub trait OpinionRepositoryTrait {
    async fn create(
        &self,
        client_id: i32,
        req: &CreateOpinionRequest,
    ) -> Result<Opinion, RepositoryError>;
    async fn find_by_product(&self, product_id: i32) -> Result<Vec<Opinion>, RepositoryError>;
    async fn grade_of_product(&self, product_id: i32) -> Result<ProductGrade, RepositoryError>;
}

#[async_trait]
pub trait OpinionServiceTrait {
    async fn add_opinion(
        &self,
        client_id: i32,
        req: &CreateOpinionRequest,
    ) -> Result<ApiResponse<OpinionResponse>, ServiceError>;
    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<OpinionResponse>>, ServiceError>;
    async fn product_grade(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<ProductGradeResponse>, ServiceError>;
}
