//! DTO for talks.

use serde::Serialize;

/// Serialization-safe view of a [`crate::domain::entities::Talk`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkDto {
    pub slug: String,
    pub title: String,
    pub event: String,
    pub date: String,
    pub location: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slides_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: String,
    pub plain_text: String,
    pub meta_title: String,
    pub meta_description: String,
}
