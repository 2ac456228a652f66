use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddToCartRequest {
    #[validate(range(min = 1, message = "Product ID is required"))]
    #[schema(example = 7)]
    pub product_id: i32,

    #[validate(range(min = 1, message = "Amount must be at least 1"))]
    #[schema(example = 2)]
    pub amount: i32,
}
