use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::orders::CheckoutRequest,
    error::AppResult,
    middleware::session::CartSession,
    models::Order,
    response::ApiResponse,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(checkout))
}

#[utoipa::path(
    post,
    path = "/api/checkout",
    params(
        ("x-cart-session" = String, Header, description = "Cart session id (UUID)")
    ),
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Order created, cart cleared", body = ApiResponse<Order>),
        (status = 400, description = "Empty cart or missing contact fields"),
        (status = 502, description = "Backend rejected or unreachable"),
    ),
    tag = "Checkout"
)]
pub async fn checkout(
    State(state): State<AppState>,
    CartSession(session): CartSession,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::submit_order(&state, session, payload).await?;
    Ok(Json(resp))
}
