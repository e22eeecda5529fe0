use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{ContactSubmission, Project, StaticPage};

/// Partial update; absent fields keep their backend value.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateAboutRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub team_members: Option<String>,
    pub images: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    pub technologies: Option<String>,
    pub images: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatePageRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProjectList {
    #[schema(value_type = Vec<Project>)]
    pub items: Vec<Project>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct PageList {
    #[schema(value_type = Vec<StaticPage>)]
    pub items: Vec<StaticPage>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ContactList {
    #[schema(value_type = Vec<ContactSubmission>)]
    pub items: Vec<ContactSubmission>,
}
