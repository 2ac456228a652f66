use crate::model::{Opinion, ProductGrade};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OpinionResponse {
    pub product_id: i32,
    pub client_id: i32,
    pub opinion: String,
    pub grade: i32,
    pub created_at: Option<String>,
}

impl From<Opinion> for OpinionResponse {
    fn from(value: Opinion) -> Self {
        OpinionResponse {
            product_id: value.product_id,
            client_id: value.client_id,
            opinion: value.opinion,
            grade: value.grade,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProductGradeResponse {
    pub product_id: i32,
    #[schema(example = 4.5)]
    pub average_grade: Option<f64>,
    pub opinion_count: i64,
}

impl ProductGradeResponse {
    pub fn new(product_id: i32, grade: ProductGrade) -> Self {
        ProductGradeResponse {
            product_id,
            average_grade: grade.average_grade.map(|avg| (avg * 100.0).round() / 100.0),
            opinion_count: grade.opinion_count,
        }
    }
}
