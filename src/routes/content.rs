use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::content::{ContactRequest, PageList, ProjectList},
    error::AppResult,
    models::{AboutContent, ContactSubmission, Project, StaticPage},
    response::ApiResponse,
    services::content_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/about", get(about))
        .route("/projects", get(list_projects))
        .route("/projects/{id}", get(get_project))
        .route("/pages", get(list_pages))
        .route("/pages/{slug}", get(get_page))
        .route("/contact", post(submit_contact))
}

#[utoipa::path(
    get,
    path = "/api/about",
    responses(
        (status = 200, description = "About-us content", body = ApiResponse<AboutContent>)
    ),
    tag = "Content"
)]
pub async fn about(State(state): State<AppState>) -> AppResult<Json<ApiResponse<AboutContent>>> {
    let resp = content_service::about(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "List projects", body = ApiResponse<ProjectList>)
    ),
    tag = "Content"
)]
pub async fn list_projects(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProjectList>>> {
    let resp = content_service::list_projects(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(
        ("id" = i64, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Get project", body = ApiResponse<Project>),
        (status = 404, description = "Project not found"),
    ),
    tag = "Content"
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Project>>> {
    let resp = content_service::get_project(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/pages",
    responses(
        (status = 200, description = "List static pages", body = ApiResponse<PageList>)
    ),
    tag = "Content"
)]
pub async fn list_pages(State(state): State<AppState>) -> AppResult<Json<ApiResponse<PageList>>> {
    let resp = content_service::list_pages(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/pages/{slug}",
    params(
        ("slug" = String, Path, description = "Page slug")
    ),
    responses(
        (status = 200, description = "Get page", body = ApiResponse<StaticPage>),
        (status = 404, description = "Page not found"),
    ),
    tag = "Content"
)]
pub async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ApiResponse<StaticPage>>> {
    let resp = content_service::get_page(&state, &slug).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Submit contact message", body = ApiResponse<ContactSubmission>),
        (status = 400, description = "Missing required fields"),
    ),
    tag = "Content"
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> AppResult<Json<ApiResponse<ContactSubmission>>> {
    let resp = content_service::submit_contact(&state, payload).await?;
    Ok(Json(resp))
}
