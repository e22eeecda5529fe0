use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AboutContent {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub team_members: Option<String>,
    pub images: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub technologies: Option<String>,
    pub images: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<i64>,
}

/// Catalog product as served by the backend. `price` is in minor currency
/// units; display formatting is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: i64,
    pub stock: i32,
    pub category_id: i64,
    pub is_active: bool,
    pub images: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StaticPage {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub total_amount: i64,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub items: Option<Vec<OrderItem>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub product_id: i64,
    pub quantity: i32,
    pub price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub products: i64,
    pub categories: i64,
    pub orders: i64,
    pub pending_orders: i64,
    pub contacts: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminUser {
    pub id: i64,
    pub email: String,
}
