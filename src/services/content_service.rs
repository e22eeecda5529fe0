use crate::{
    dto::content::{
        ContactList, ContactRequest, PageList, ProjectList, ProjectPayload, UpdateAboutRequest,
        UpdatePageRequest,
    },
    error::{AppError, AppResult},
    middleware::auth::AdminSession,
    models::{AboutContent, ContactSubmission, Project, StaticPage},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn about(state: &AppState) -> AppResult<ApiResponse<AboutContent>> {
    let about = state.backend.about().await?;
    Ok(ApiResponse::success("About", about, None))
}

pub async fn update_about(
    state: &AppState,
    session: &AdminSession,
    payload: UpdateAboutRequest,
) -> AppResult<ApiResponse<AboutContent>> {
    let about = state.backend.update_about(&session.token, &payload).await?;
    Ok(ApiResponse::success("Updated", about, Some(Meta::empty())))
}

pub async fn list_projects(state: &AppState) -> AppResult<ApiResponse<ProjectList>> {
    let items = state.backend.projects().await?;
    let total = items.len() as i64;

    Ok(ApiResponse::success(
        "Projects",
        ProjectList { items },
        Some(Meta::new(1, total, total)),
    ))
}

pub async fn get_project(state: &AppState, id: i64) -> AppResult<ApiResponse<Project>> {
    let project = state.backend.project(id).await?;
    Ok(ApiResponse::success("Project", project, None))
}

pub async fn create_project(
    state: &AppState,
    session: &AdminSession,
    payload: ProjectPayload,
) -> AppResult<ApiResponse<Project>> {
    validate_project(&payload)?;
    let project = state.backend.create_project(&session.token, &payload).await?;

    Ok(ApiResponse::success(
        "Project created",
        project,
        Some(Meta::empty()),
    ))
}

pub async fn update_project(
    state: &AppState,
    session: &AdminSession,
    id: i64,
    payload: ProjectPayload,
) -> AppResult<ApiResponse<Project>> {
    validate_project(&payload)?;
    let project = state
        .backend
        .update_project(&session.token, id, &payload)
        .await?;

    Ok(ApiResponse::success("Updated", project, Some(Meta::empty())))
}

pub async fn delete_project(
    state: &AppState,
    session: &AdminSession,
    id: i64,
) -> AppResult<ApiResponse<serde_json::Value>> {
    state.backend.delete_project(&session.token, id).await?;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn validate_project(payload: &ProjectPayload) -> AppResult<()> {
    if payload.title.trim().is_empty() || payload.description.trim().is_empty() {
        return Err(AppError::BadRequest(
            "title and description are required".to_string(),
        ));
    }
    Ok(())
}

pub async fn list_pages(state: &AppState) -> AppResult<ApiResponse<PageList>> {
    let items = state.backend.pages().await?;
    let total = items.len() as i64;

    Ok(ApiResponse::success(
        "Pages",
        PageList { items },
        Some(Meta::new(1, total, total)),
    ))
}

pub async fn get_page(state: &AppState, slug: &str) -> AppResult<ApiResponse<StaticPage>> {
    let page = state.backend.page_by_slug(slug).await?;
    Ok(ApiResponse::success("Page", page, None))
}

pub async fn update_page(
    state: &AppState,
    session: &AdminSession,
    id: i64,
    payload: UpdatePageRequest,
) -> AppResult<ApiResponse<StaticPage>> {
    if payload.title.trim().is_empty() {
        return Err(AppError::BadRequest("title is required".to_string()));
    }

    let page = state
        .backend
        .update_page(&session.token, id, &payload)
        .await?;

    Ok(ApiResponse::success("Updated", page, Some(Meta::empty())))
}

pub async fn submit_contact(
    state: &AppState,
    payload: ContactRequest,
) -> AppResult<ApiResponse<ContactSubmission>> {
    if payload.name.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.message.trim().is_empty()
    {
        return Err(AppError::BadRequest(
            "name, email and message are required".to_string(),
        ));
    }

    let submission = state.backend.submit_contact(&payload).await?;

    Ok(ApiResponse::success(
        "Message sent",
        submission,
        Some(Meta::empty()),
    ))
}

pub async fn list_contacts(
    state: &AppState,
    session: &AdminSession,
) -> AppResult<ApiResponse<ContactList>> {
    let items = state.backend.contacts(&session.token).await?;
    let total = items.len() as i64;

    Ok(ApiResponse::success(
        "Contact submissions",
        ContactList { items },
        Some(Meta::new(1, total, total)),
    ))
}
