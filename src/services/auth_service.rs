use crate::{
    dto::auth::{LoginRequest, TokenResponse},
    error::{AppError, AppResult},
    models::AdminUser,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Exchange credentials for a backend-issued bearer token. The gateway never
/// sees password hashes or token internals.
pub async fn login(state: &AppState, payload: LoginRequest) -> AppResult<ApiResponse<TokenResponse>> {
    let email = payload.email.trim();
    if email.is_empty() || payload.password.is_empty() {
        return Err(AppError::BadRequest(
            "email and password are required".to_string(),
        ));
    }

    let token = state.backend.login(email, &payload.password).await?;

    Ok(ApiResponse::success("Logged in", token, Some(Meta::empty())))
}

/// Validate a bearer token against the backend's whoami endpoint. Any failure
/// collapses to Unauthorized: expired, revoked and garbage tokens all end the
/// same way for the caller.
pub async fn authorize(state: &AppState, token: &str) -> AppResult<AdminUser> {
    match state.backend.me(token).await {
        Ok(user) => Ok(user),
        Err(AppError::Transport(err)) => Err(AppError::Transport(err)),
        Err(AppError::Upstream(status)) if status.is_server_error() => {
            Err(AppError::Upstream(status))
        }
        Err(_) => Err(AppError::Unauthorized),
    }
}
