use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch},
};

use crate::{
    dto::cart::{AddToCartRequest, CartView, UpdateQuantityRequest},
    error::AppResult,
    middleware::session::CartSession,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(view_cart).post(add_to_cart).delete(clear_cart))
        .route(
            "/{product_id}",
            patch(update_quantity).delete(remove_from_cart),
        )
}

#[utoipa::path(
    get,
    path = "/api/cart",
    params(
        ("x-cart-session" = String, Header, description = "Cart session id (UUID)")
    ),
    responses(
        (status = 200, description = "Current cart with derived totals", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn view_cart(
    State(state): State<AppState>,
    CartSession(session): CartSession,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::view_cart(&state, session).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    params(
        ("x-cart-session" = String, Header, description = "Cart session id (UUID)")
    ),
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Add product to cart", body = ApiResponse<CartView>),
        (status = 400, description = "Invalid quantity or unknown product"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    CartSession(session): CartSession,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::add_item(&state, session, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = i64, Path, description = "Product ID"),
        ("x-cart-session" = String, Header, description = "Cart session id (UUID)")
    ),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Set line quantity; 0 or less removes the line", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    CartSession(session): CartSession,
    Path(product_id): Path<i64>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::update_quantity(&state, session, product_id, payload.quantity).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = i64, Path, description = "Product ID"),
        ("x-cart-session" = String, Header, description = "Cart session id (UUID)")
    ),
    responses(
        (status = 200, description = "Remove product from cart", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    CartSession(session): CartSession,
    Path(product_id): Path<i64>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::remove_item(&state, session, product_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/cart",
    params(
        ("x-cart-session" = String, Header, description = "Cart session id (UUID)")
    ),
    responses(
        (status = 200, description = "Empty the cart", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    CartSession(session): CartSession,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::clear_cart(&state, session).await?;
    Ok(Json(resp))
}
