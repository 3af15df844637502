//! DTO for blog posts.

use serde::Serialize;

/// Serialization-safe view of a [`crate::domain::entities::Post`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub reading_time: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub content: String,
    pub plain_text: String,
    pub meta_title: String,
    pub meta_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_keyword: Option<String>,
}
