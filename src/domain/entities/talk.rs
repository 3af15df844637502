//! Talk entity representing a conference or meetup presentation.

use chrono::{DateTime, Utc};

use super::{seo_from_overrides, with_fallback};
use crate::domain::content::{RawContent, TalkFrontmatter};
use crate::domain::value_objects::{PlainTextContent, SeoMetadata};
use crate::dto::TalkDto;
use crate::utils::content_date::parse_content_date;

/// A talk given at an event.
///
/// Talks have an optional description, so `meta_description()` may be empty
/// when neither an override nor a description is set.
#[derive(Debug, Clone)]
pub struct Talk {
    slug: String,
    title: String,
    event: String,
    date: String,
    location: String,
    tags: Vec<String>,
    slides_url: Option<String>,
    video_url: Option<String>,
    featured: bool,
    description: Option<String>,
    content: String,
    plain_text: PlainTextContent,
    seo: Option<SeoMetadata>,
}

impl Talk {
    /// Creates a talk from its slug, frontmatter and Markdown body.
    pub fn create(
        slug: impl Into<String>,
        frontmatter: TalkFrontmatter,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        let seo = seo_from_overrides(
            frontmatter.seo_title.as_deref(),
            frontmatter.seo_description.as_deref(),
            None,
        );

        Self {
            slug: slug.into(),
            title: frontmatter.title,
            event: frontmatter.event,
            date: frontmatter.date,
            location: frontmatter.location,
            tags: frontmatter.tags,
            slides_url: frontmatter.slides_url,
            video_url: frontmatter.video_url,
            featured: frontmatter.featured.unwrap_or(false),
            description: frontmatter.description,
            plain_text: PlainTextContent::from_markdown(&content),
            content,
            seo,
        }
    }

    pub fn from_raw(raw: RawContent<TalkFrontmatter>) -> Self {
        Self::create(raw.slug, raw.frontmatter, raw.content)
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn held_at(&self) -> Option<DateTime<Utc>> {
        parse_content_date(&self.date)
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn slides_url(&self) -> Option<&str> {
        self.slides_url.as_deref()
    }

    pub fn video_url(&self) -> Option<&str> {
        self.video_url.as_deref()
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn plain_text(&self) -> &PlainTextContent {
        &self.plain_text
    }

    pub fn seo_metadata(&self) -> Option<&SeoMetadata> {
        self.seo.as_ref()
    }

    pub fn meta_title(&self) -> &str {
        with_fallback(self.seo.as_ref().map(SeoMetadata::title), &self.title)
    }

    pub fn meta_description(&self) -> &str {
        with_fallback(
            self.seo.as_ref().map(SeoMetadata::description),
            self.description.as_deref().unwrap_or_default(),
        )
    }

    pub fn to_dto(&self) -> TalkDto {
        TalkDto {
            slug: self.slug.clone(),
            title: self.title.clone(),
            event: self.event.clone(),
            date: self.date.clone(),
            location: self.location.clone(),
            tags: self.tags.clone(),
            slides_url: self.slides_url.clone(),
            video_url: self.video_url.clone(),
            featured: self.featured,
            description: self.description.clone(),
            content: self.content.clone(),
            plain_text: self.plain_text.to_string(),
            meta_title: self.meta_title().to_string(),
            meta_description: self.meta_description().to_string(),
        }
    }
}
