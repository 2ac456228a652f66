use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOpinionRequest {
    #[validate(range(min = 1, message = "Product ID is required"))]
    pub product_id: i32,

    #[validate(length(min = 1, max = 2000, message = "Opinion must be 1-2000 characters"))]
    pub opinion: String,

    #[validate(range(min = 1, max = 5, message = "Grade must be between 1 and 5"))]
    #[schema(example = 5)]
    pub grade: i32,
}
