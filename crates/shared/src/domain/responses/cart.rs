use crate::model::CartEntryWithProduct;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CartItemResponse {
    pub product_id: i32,
    pub amount: i32,
    pub name: String,
    pub price: i32,
}

impl From<CartEntryWithProduct> for CartItemResponse {
    fn from(value: CartEntryWithProduct) -> Self {
        CartItemResponse {
            product_id: value.product_id,
            amount: value.amount,
            name: value.name,
            price: value.price,
        }
    }
}
