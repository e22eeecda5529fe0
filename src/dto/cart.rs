use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::cart::{Cart, CartItem};

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: i64,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    pub quantity: i32,
}

/// Cart as the pages render it: the lines plus the derived totals, recomputed
/// from current state on every read.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub total: i64,
    pub item_count: i64,
}

impl From<Cart> for CartView {
    fn from(cart: Cart) -> Self {
        Self {
            total: cart.total(),
            item_count: cart.item_count(),
            items: cart.items().to_vec(),
        }
    }
}
