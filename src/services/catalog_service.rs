use crate::{
    dto::catalog::{CategoryList, CreateCategoryRequest, CreateProductRequest, ProductList},
    error::{AppError, AppResult},
    middleware::auth::AdminSession,
    models::{Category, Product},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    category: Option<String>,
) -> AppResult<ApiResponse<ProductList>> {
    let items = state.backend.products(category.as_deref()).await?;
    let total = items.len() as i64;

    Ok(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(Meta::new(1, total, total)),
    ))
}

pub async fn get_product(state: &AppState, slug: &str) -> AppResult<ApiResponse<Product>> {
    let product = state.backend.product_by_slug(slug).await?;
    Ok(ApiResponse::success("Product", product, None))
}

pub async fn create_product(
    state: &AppState,
    session: &AdminSession,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    if payload.name.trim().is_empty() || payload.slug.trim().is_empty() {
        return Err(AppError::BadRequest(
            "name and slug are required".to_string(),
        ));
    }
    if payload.price < 0 {
        return Err(AppError::BadRequest("price must not be negative".to_string()));
    }

    let product = state.backend.create_product(&session.token, &payload).await?;

    Ok(ApiResponse::success(
        "Product created",
        product,
        Some(Meta::empty()),
    ))
}

pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let items = state.backend.categories().await?;
    let total = items.len() as i64;

    Ok(ApiResponse::success(
        "Categories",
        CategoryList { items },
        Some(Meta::new(1, total, total)),
    ))
}

pub async fn create_category(
    state: &AppState,
    session: &AdminSession,
    payload: CreateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    if payload.name.trim().is_empty() || payload.slug.trim().is_empty() {
        return Err(AppError::BadRequest(
            "name and slug are required".to_string(),
        ));
    }

    let category = state
        .backend
        .create_category(&session.token, &payload)
        .await?;

    Ok(ApiResponse::success(
        "Category created",
        category,
        Some(Meta::empty()),
    ))
}
