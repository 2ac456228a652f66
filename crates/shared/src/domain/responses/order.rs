use crate::model::{Order, OrderLine, OrderStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    pub client_id: i32,
    pub created_at: String,
    pub status: OrderStatus,
    pub discount_code: Option<String>,
    pub shipping_address: String,
    pub shipping_city: String,
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.order_id,
            client_id: value.client_id,
            created_at: value.created_at.to_string(),
            status: value.status,
            discount_code: value.discount_code,
            shipping_address: value.shipping_address,
            shipping_city: value.shipping_city,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct OrderLineResponse {
    pub product_id: i32,
    pub amount: i32,
}

impl From<OrderLine> for OrderLineResponse {
    fn from(value: OrderLine) -> Self {
        OrderLineResponse {
            product_id: value.product_id,
            amount: value.amount,
        }
    }
}
