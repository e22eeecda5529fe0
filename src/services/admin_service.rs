use crate::{
    error::AppResult,
    middleware::auth::AdminSession,
    models::DashboardStats,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn dashboard_stats(
    state: &AppState,
    session: &AdminSession,
) -> AppResult<ApiResponse<DashboardStats>> {
    let stats = state.backend.stats(&session.token).await?;
    Ok(ApiResponse::success("Stats", stats, Some(Meta::empty())))
}
