use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub category: String,
    /// Minor currency units.
    pub price: i32,
    pub description: Option<String>,
    pub active: bool,
}
