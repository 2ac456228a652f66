use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CartEntry {
    pub client_id: i32,
    pub product_id: i32,
    pub amount: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartEntryWithProduct {
    pub product_id: i32,
    pub amount: i32,
    pub name: String,
    pub price: i32,
}
