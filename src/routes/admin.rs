use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch, post, put},
};

use crate::{
    dto::{
        catalog::{CreateCategoryRequest, CreateProductRequest},
        content::{ContactList, ProjectPayload, UpdateAboutRequest, UpdatePageRequest},
        orders::{OrderList, UpdateOrderStatusRequest},
    },
    error::AppResult,
    middleware::auth::AdminSession,
    models::{
        AboutContent, AdminUser, Category, DashboardStats, Order, Product, Project, StaticPage,
    },
    response::ApiResponse,
    services::{admin_service, catalog_service, content_service, order_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route("/stats", get(stats))
        .route("/orders", get(list_all_orders))
        .route("/orders/{id}/status", patch(update_order_status))
        .route("/products", post(create_product))
        .route("/categories", post(create_category))
        .route("/pages/{id}", put(update_page))
        .route("/about", put(update_about))
        .route("/projects", post(create_project))
        .route("/projects/{id}", put(update_project).delete(delete_project))
        .route("/contacts", get(list_contacts))
}

#[utoipa::path(
    get,
    path = "/api/admin/me",
    responses(
        (status = 200, description = "Identity behind the presented token", body = ApiResponse<AdminUser>),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn me(session: AdminSession) -> AppResult<Json<ApiResponse<AdminUser>>> {
    Ok(Json(ApiResponse::success("OK", session.user, None)))
}

#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Dashboard statistics", body = ApiResponse<DashboardStats>),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn stats(
    State(state): State<AppState>,
    session: AdminSession,
) -> AppResult<Json<ApiResponse<DashboardStats>>> {
    let resp = admin_service::dashboard_stats(&state, &session).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    responses(
        (status = 200, description = "All orders", body = ApiResponse<OrderList>),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_all_orders(
    State(state): State<AppState>,
    session: AdminSession,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_orders(&state, &session).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/admin/orders/{id}/status",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Update order status", body = ApiResponse<Order>),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::update_order_status(&state, &session, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Create product", body = ApiResponse<Product>),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_product(
    State(state): State<AppState>,
    session: AdminSession,
    Json(payload): Json<CreateProductRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = catalog_service::create_product(&state, &session, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Create category", body = ApiResponse<Category>),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_category(
    State(state): State<AppState>,
    session: AdminSession,
    Json(payload): Json<CreateCategoryRequest>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let resp = catalog_service::create_category(&state, &session, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/pages/{id}",
    params(
        ("id" = i64, Path, description = "Page ID")
    ),
    request_body = UpdatePageRequest,
    responses(
        (status = 200, description = "Update page", body = ApiResponse<StaticPage>),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_page(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePageRequest>,
) -> AppResult<Json<ApiResponse<StaticPage>>> {
    let resp = content_service::update_page(&state, &session, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/about",
    request_body = UpdateAboutRequest,
    responses(
        (status = 200, description = "Update about-us content", body = ApiResponse<AboutContent>),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_about(
    State(state): State<AppState>,
    session: AdminSession,
    Json(payload): Json<UpdateAboutRequest>,
) -> AppResult<Json<ApiResponse<AboutContent>>> {
    let resp = content_service::update_about(&state, &session, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/projects",
    request_body = ProjectPayload,
    responses(
        (status = 200, description = "Create project", body = ApiResponse<Project>),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_project(
    State(state): State<AppState>,
    session: AdminSession,
    Json(payload): Json<ProjectPayload>,
) -> AppResult<Json<ApiResponse<Project>>> {
    let resp = content_service::create_project(&state, &session, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/projects/{id}",
    params(
        ("id" = i64, Path, description = "Project ID")
    ),
    request_body = ProjectPayload,
    responses(
        (status = 200, description = "Update project", body = ApiResponse<Project>),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_project(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<i64>,
    Json(payload): Json<ProjectPayload>,
) -> AppResult<Json<ApiResponse<Project>>> {
    let resp = content_service::update_project(&state, &session, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/projects/{id}",
    params(
        ("id" = i64, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Delete project"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_project(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = content_service::delete_project(&state, &session, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/contacts",
    responses(
        (status = 200, description = "Contact submissions", body = ApiResponse<ContactList>),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_contacts(
    State(state): State<AppState>,
    session: AdminSession,
) -> AppResult<Json<ApiResponse<ContactList>>> {
    let resp = content_service::list_contacts(&state, &session).await?;
    Ok(Json(resp))
}
