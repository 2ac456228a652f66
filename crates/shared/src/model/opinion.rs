use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Opinion {
    pub product_id: i32,
    pub client_id: i32,
    pub opinion: String,
    pub grade: i32,
    pub created_at: Option<NaiveDateTime>,
}

/// Average grade over all opinions of one product; `average_grade` is `None`
/// when nobody rated it yet.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductGrade {
    pub average_grade: Option<f64>,
    pub opinion_count: i64,
}
