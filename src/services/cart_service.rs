use uuid::Uuid;

use crate::{
    dto::cart::{AddToCartRequest, CartView},
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn view_cart(state: &AppState, session: Uuid) -> AppResult<ApiResponse<CartView>> {
    let cart = state.carts.cart(session);
    Ok(ApiResponse::success(
        "OK",
        CartView::from(cart),
        Some(Meta::empty()),
    ))
}

/// Resolve the product against the backend so the cart line carries the
/// server-side name and price, then merge it into the session's cart. There is
/// no stock check here; the backend validates stock (if at all) when the order
/// is created.
pub async fn add_item(
    state: &AppState,
    session: Uuid,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartView>> {
    if payload.quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }

    let product = state.backend.product(payload.product_id).await?;

    let cart = state
        .carts
        .mutate(session, |cart| cart.add_item(&product, payload.quantity))?;

    Ok(ApiResponse::success(
        "Added to cart",
        CartView::from(cart),
        Some(Meta::empty()),
    ))
}

/// Removing a product that is not in the cart is a no-op, not an error.
pub async fn remove_item(
    state: &AppState,
    session: Uuid,
    product_id: i64,
) -> AppResult<ApiResponse<CartView>> {
    let cart = state
        .carts
        .mutate(session, |cart| cart.remove_item(product_id))?;

    Ok(ApiResponse::success(
        "Removed from cart",
        CartView::from(cart),
        Some(Meta::empty()),
    ))
}

/// A quantity <= 0 removes the line; an unknown product is a no-op.
pub async fn update_quantity(
    state: &AppState,
    session: Uuid,
    product_id: i64,
    quantity: i32,
) -> AppResult<ApiResponse<CartView>> {
    let cart = state
        .carts
        .mutate(session, |cart| cart.update_quantity(product_id, quantity))?;

    Ok(ApiResponse::success(
        "Cart updated",
        CartView::from(cart),
        Some(Meta::empty()),
    ))
}

pub async fn clear_cart(state: &AppState, session: Uuid) -> AppResult<ApiResponse<CartView>> {
    let cart = state.carts.mutate(session, |cart| cart.clear())?;

    Ok(ApiResponse::success(
        "Cart cleared",
        CartView::from(cart),
        Some(Meta::empty()),
    ))
}
