//! Order DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::order::Order;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PlaceOrderRequest {
    pub product_id: i64,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub status: String,
    pub order_date: DateTime<Utc>,
}

impl OrderResponse {
    pub fn from_order(o: Order) -> Self {
        Self {
            id: o.id,
            product_id: o.product_id,
            quantity: o.quantity,
            status: o.status.to_string(),
            order_date: o.order_date,
        }
    }
}
