use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::auth::{LoginRequest, TokenResponse},
    error::AppResult,
    response::ApiResponse,
    services::auth_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login, returns backend-issued bearer token", body = ApiResponse<TokenResponse>),
        (status = 400, description = "Invalid credentials"),
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<TokenResponse>>> {
    let resp = auth_service::login(&state, payload).await?;
    Ok(Json(resp))
}
