use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusRequest {
    /// One of `packing`, `shipped`, `delivered`, `cancelled`.
    #[validate(length(min = 1, message = "Status is required"))]
    #[schema(example = "shipped")]
    pub status: String,
}
