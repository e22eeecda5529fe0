use axum::{extract::FromRequestParts, http::header};

use crate::{error::AppError, models::AdminUser, services::auth_service, state::AppState};

/// Proof that the request carried a bearer token the backend accepts.
///
/// The token is opaque here: possession is checked locally, validity by the
/// backend's whoami endpoint. Either failure ends in 401, on which the caller
/// is expected to drop its stored token and return to login.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
    pub user: AdminUser,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AppError::Unauthorized)?;

        let auth_str = auth_header.to_str().map_err(|_| AppError::Unauthorized)?;

        if !auth_str.starts_with("Bearer ") {
            return Err(AppError::Unauthorized);
        }
        let token = auth_str.trim_start_matches("Bearer ").trim();
        if token.is_empty() {
            return Err(AppError::Unauthorized);
        }

        let user = auth_service::authorize(state, token).await?;

        Ok(AdminSession {
            token: token.to_string(),
            user,
        })
    }
}
