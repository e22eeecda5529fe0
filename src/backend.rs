use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use crate::{
    dto::{
        auth::TokenResponse,
        catalog::{CreateCategoryRequest, CreateProductRequest},
        content::{ContactRequest, ProjectPayload, UpdateAboutRequest, UpdatePageRequest},
        orders::CreateOrderRequest,
    },
    error::{AppError, AppResult},
    models::{
        AboutContent, AdminUser, Category, ContactSubmission, DashboardStats, Order, Product,
        Project, StaticPage,
    },
};

/// Typed client for the external REST backend. Every piece of durable data
/// lives behind this boundary; the gateway only passes requests through and
/// maps failure statuses onto the local error taxonomy.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> AppResult<T> {
        let resp = check_status(req.send().await?).await?;
        Ok(resp.json::<T>().await?)
    }

    async fn send_unit(&self, req: reqwest::RequestBuilder) -> AppResult<()> {
        check_status(req.send().await?).await?;
        Ok(())
    }

    // About content

    pub async fn about(&self) -> AppResult<AboutContent> {
        self.send(self.http.get(self.url("/api/about"))).await
    }

    pub async fn update_about(
        &self,
        token: &str,
        payload: &UpdateAboutRequest,
    ) -> AppResult<AboutContent> {
        self.send(
            self.http
                .put(self.url("/api/about"))
                .bearer_auth(token)
                .json(payload),
        )
        .await
    }

    // Projects

    pub async fn projects(&self) -> AppResult<Vec<Project>> {
        self.send(self.http.get(self.url("/api/projects"))).await
    }

    pub async fn project(&self, id: i64) -> AppResult<Project> {
        self.send(self.http.get(self.url(&format!("/api/projects/{id}"))))
            .await
    }

    pub async fn create_project(&self, token: &str, payload: &ProjectPayload) -> AppResult<Project> {
        self.send(
            self.http
                .post(self.url("/api/projects"))
                .bearer_auth(token)
                .json(payload),
        )
        .await
    }

    pub async fn update_project(
        &self,
        token: &str,
        id: i64,
        payload: &ProjectPayload,
    ) -> AppResult<Project> {
        self.send(
            self.http
                .put(self.url(&format!("/api/projects/{id}")))
                .bearer_auth(token)
                .json(payload),
        )
        .await
    }

    pub async fn delete_project(&self, token: &str, id: i64) -> AppResult<()> {
        self.send_unit(
            self.http
                .delete(self.url(&format!("/api/projects/{id}")))
                .bearer_auth(token),
        )
        .await
    }

    // Catalog

    pub async fn products(&self, category: Option<&str>) -> AppResult<Vec<Product>> {
        let mut req = self.http.get(self.url("/api/products"));
        if let Some(category) = category {
            req = req.query(&[("category", category)]);
        }
        self.send(req).await
    }

    pub async fn product(&self, id: i64) -> AppResult<Product> {
        self.send(self.http.get(self.url(&format!("/api/products/{id}"))))
            .await
    }

    pub async fn product_by_slug(&self, slug: &str) -> AppResult<Product> {
        self.send(self.http.get(self.url(&format!("/api/products/slug/{slug}"))))
            .await
    }

    pub async fn create_product(
        &self,
        token: &str,
        payload: &CreateProductRequest,
    ) -> AppResult<Product> {
        self.send(
            self.http
                .post(self.url("/api/products"))
                .bearer_auth(token)
                .json(payload),
        )
        .await
    }

    pub async fn categories(&self) -> AppResult<Vec<Category>> {
        self.send(self.http.get(self.url("/api/categories"))).await
    }

    pub async fn create_category(
        &self,
        token: &str,
        payload: &CreateCategoryRequest,
    ) -> AppResult<Category> {
        self.send(
            self.http
                .post(self.url("/api/categories"))
                .bearer_auth(token)
                .json(payload),
        )
        .await
    }

    // Orders

    pub async fn create_order(&self, payload: &CreateOrderRequest) -> AppResult<Order> {
        self.send(self.http.post(self.url("/api/orders")).json(payload))
            .await
    }

    pub async fn orders(&self, token: &str) -> AppResult<Vec<Order>> {
        self.send(self.http.get(self.url("/api/orders")).bearer_auth(token))
            .await
    }

    pub async fn update_order_status(&self, token: &str, id: i64, status: &str) -> AppResult<Order> {
        self.send(
            self.http
                .put(self.url(&format!("/api/orders/{id}/status")))
                .bearer_auth(token)
                .json(&serde_json::json!({ "status": status })),
        )
        .await
    }

    // Static pages

    pub async fn pages(&self) -> AppResult<Vec<StaticPage>> {
        self.send(self.http.get(self.url("/api/pages"))).await
    }

    pub async fn page_by_slug(&self, slug: &str) -> AppResult<StaticPage> {
        self.send(self.http.get(self.url(&format!("/api/pages/{slug}"))))
            .await
    }

    pub async fn update_page(
        &self,
        token: &str,
        id: i64,
        payload: &UpdatePageRequest,
    ) -> AppResult<StaticPage> {
        self.send(
            self.http
                .put(self.url(&format!("/api/pages/{id}")))
                .bearer_auth(token)
                .json(payload),
        )
        .await
    }

    // Contact

    pub async fn submit_contact(&self, payload: &ContactRequest) -> AppResult<ContactSubmission> {
        self.send(self.http.post(self.url("/api/contact")).json(payload))
            .await
    }

    pub async fn contacts(&self, token: &str) -> AppResult<Vec<ContactSubmission>> {
        self.send(self.http.get(self.url("/api/contact")).bearer_auth(token))
            .await
    }

    // Dashboard

    pub async fn stats(&self, token: &str) -> AppResult<DashboardStats> {
        self.send(
            self.http
                .get(self.url("/api/admin/stats"))
                .bearer_auth(token),
        )
        .await
    }

    // Auth. The backend takes form-encoded credentials and returns a bearer
    // token it alone can validate; the gateway never decodes it.

    pub async fn login(&self, email: &str, password: &str) -> AppResult<TokenResponse> {
        self.send(
            self.http
                .post(self.url("/api/auth/login"))
                .form(&[("username", email), ("password", password)]),
        )
        .await
    }

    pub async fn me(&self, token: &str) -> AppResult<AdminUser> {
        self.send(self.http.get(self.url("/api/auth/me")).bearer_auth(token))
            .await
    }
}

async fn check_status(resp: reqwest::Response) -> AppResult<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::UNAUTHORIZED {
        Err(AppError::Unauthorized)
    } else if status == StatusCode::NOT_FOUND {
        Err(AppError::NotFound)
    } else if status.is_client_error() {
        let body = resp.text().await.unwrap_or_default();
        Err(AppError::BadRequest(body))
    } else {
        Err(AppError::Upstream(status))
    }
}
