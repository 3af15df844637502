//! Post entity representing a blog article.

use chrono::{DateTime, Utc};

use super::{seo_from_overrides, with_fallback};
use crate::domain::content::{PostFrontmatter, RawContent};
use crate::domain::value_objects::{PlainTextContent, SeoMetadata};
use crate::dto::PostDto;
use crate::utils::content_date::parse_content_date;

/// A published blog post.
///
/// The SEO getters fall back to `title` and `excerpt` when no override is set.
#[derive(Debug, Clone)]
pub struct Post {
    slug: String,
    title: String,
    excerpt: String,
    date: String,
    reading_time: String,
    tags: Vec<String>,
    featured: bool,
    content: String,
    plain_text: PlainTextContent,
    seo: Option<SeoMetadata>,
    focus_keyword: Option<String>,
}

impl Post {
    /// Creates a post from its slug, frontmatter and Markdown body.
    pub fn create(
        slug: impl Into<String>,
        frontmatter: PostFrontmatter,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        let seo = seo_from_overrides(
            frontmatter.seo_title.as_deref(),
            frontmatter.seo_description.as_deref(),
            frontmatter.focus_keyword.as_deref(),
        );

        Self {
            slug: slug.into(),
            title: frontmatter.title,
            excerpt: frontmatter.excerpt,
            date: frontmatter.date,
            reading_time: frontmatter.reading_time,
            tags: frontmatter.tags,
            featured: frontmatter.featured.unwrap_or(false),
            plain_text: PlainTextContent::from_markdown(&content),
            content,
            seo,
            focus_keyword: frontmatter.focus_keyword.filter(|k| !k.is_empty()),
        }
    }

    pub fn from_raw(raw: RawContent<PostFrontmatter>) -> Self {
        Self::create(raw.slug, raw.frontmatter, raw.content)
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// The publication date as a timestamp, if the date string parses.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_content_date(&self.date)
    }

    pub fn reading_time(&self) -> &str {
        &self.reading_time
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_featured(&self) -> bool {
        self.featured
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
            &self.excerpt,
        )
    }

    /// The explicitly configured focus keyword. Never falls back.
    pub fn focus_keyword(&self) -> Option<&str> {
        self.focus_keyword.as_deref()
    }

    pub fn to_dto(&self) -> PostDto {
        PostDto {
            slug: self.slug.clone(),
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            date: self.date.clone(),
            reading_time: self.reading_time.clone(),
            tags: self.tags.clone(),
            featured: self.featured,
            content: self.content.clone(),
            plain_text: self.plain_text.to_string(),
            meta_title: self.meta_title().to_string(),
            meta_description: self.meta_description().to_string(),
            focus_keyword: self.focus_keyword.clone(),
        }
    }
}
