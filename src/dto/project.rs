//! DTO for projects.

use serde::Serialize;

use crate::domain::content::ProjectStatus;

/// Serialization-safe view of a [`crate::domain::entities::Project`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub repo_url: String,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_commit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    pub content: String,
    pub plain_text: String,
    pub meta_title: String,
    pub meta_description: String,
}
