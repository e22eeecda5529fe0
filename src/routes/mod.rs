use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod content;
pub mod doc;
pub mod health;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(content::router())
        .nest("/products", catalog::products_router())
        .nest("/categories", catalog::categories_router())
        .nest("/cart", cart::router())
        .nest("/checkout", checkout::router())
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
}
