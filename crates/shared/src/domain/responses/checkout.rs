use crate::domain::responses::OrderLineResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of a committed checkout: the new order and the lines copied from the cart.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CheckoutResponse {
    pub order_id: i32,
    pub lines: Vec<OrderLineResponse>,
}
