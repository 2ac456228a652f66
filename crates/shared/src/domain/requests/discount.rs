use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct CheckDiscountCode {
    #[serde(default)]
    pub code: String,
}
