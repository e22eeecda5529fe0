use uuid::Uuid;

use crate::{
    dto::orders::{CheckoutRequest, CreateOrderRequest, OrderList, UpdateOrderStatusRequest},
    error::{AppError, AppResult},
    middleware::auth::AdminSession,
    models::{Order, OrderItem},
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Turn the session's cart into a single create-order call.
///
/// Validation happens before any network traffic: blank contact fields and an
/// empty cart are rejected locally. On upstream failure the cart is left
/// untouched so the user can retry; on success it is cleared. Nothing here
/// deduplicates a double submit; two rapid identical requests create two
/// orders.
pub async fn submit_order(
    state: &AppState,
    session: Uuid,
    payload: CheckoutRequest,
) -> AppResult<ApiResponse<Order>> {
    let name = payload.name.trim();
    let email = payload.email.trim();
    if name.is_empty() || email.is_empty() {
        return Err(AppError::BadRequest(
            "name and email are required".to_string(),
        ));
    }

    let cart = state.carts.cart(session);
    if cart.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".to_string()));
    }

    let request = CreateOrderRequest {
        customer_name: name.to_string(),
        customer_email: email.to_string(),
        total_amount: cart.total(),
        status: "pending".to_string(),
        items: cart
            .items()
            .iter()
            .map(|item| OrderItem {
                product_id: item.product_id,
                quantity: item.quantity,
                price: item.unit_price,
            })
            .collect(),
    };

    let order = state.backend.create_order(&request).await?;

    state.carts.mutate(session, |cart| cart.clear())?;

    tracing::info!(order_id = order.id, total = order.total_amount, "order placed");

    Ok(ApiResponse::success(
        "Order placed",
        order,
        Some(Meta::empty()),
    ))
}

pub async fn list_orders(
    state: &AppState,
    session: &AdminSession,
) -> AppResult<ApiResponse<OrderList>> {
    let items = state.backend.orders(&session.token).await?;
    let total = items.len() as i64;

    Ok(ApiResponse::success(
        "OK",
        OrderList { items },
        Some(Meta::new(1, total, total)),
    ))
}

pub async fn update_order_status(
    state: &AppState,
    session: &AdminSession,
    id: i64,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    let status = payload.status.trim();
    if status.is_empty() {
        return Err(AppError::BadRequest("status is required".to_string()));
    }

    let order = state
        .backend
        .update_order_status(&session.token, id, status)
        .await?;

    Ok(ApiResponse::success("Updated", order, Some(Meta::empty())))
}
