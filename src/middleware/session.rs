use axum::extract::FromRequestParts;
use uuid::Uuid;

use crate::error::AppError;

pub const CART_SESSION_HEADER: &str = "x-cart-session";

/// Opaque cart identity the client generates once and presents on every cart
/// request. The browser equivalent of a localStorage key.
#[derive(Debug, Clone, Copy)]
pub struct CartSession(pub Uuid);

impl<S> FromRequestParts<S> for CartSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(CART_SESSION_HEADER)
            .ok_or_else(|| AppError::BadRequest(format!("Missing {CART_SESSION_HEADER} header")))?;

        let value = value
            .to_str()
            .map_err(|_| AppError::BadRequest(format!("Invalid {CART_SESSION_HEADER} header")))?;

        let id = Uuid::parse_str(value.trim())
            .map_err(|_| AppError::BadRequest("Cart session id must be a UUID".into()))?;

        Ok(CartSession(id))
    }
}
