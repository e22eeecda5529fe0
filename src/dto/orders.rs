use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Order, OrderItem};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    pub name: String,
    pub email: String,
}

/// Wire payload for the backend's create-order endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub total_amount: i64,
    pub status: String,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct OrderList {
    #[schema(value_type = Vec<Order>)]
    pub items: Vec<Order>,
}
