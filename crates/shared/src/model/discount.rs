use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DiscountCode {
    pub code: String,
    pub discount_percent: i32,
    pub admin_id: Option<i32>,
}
