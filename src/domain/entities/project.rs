//! Project entity representing an open-source project.

use super::{seo_from_overrides, with_fallback};
use crate::domain::content::{ProjectFrontmatter, ProjectStatus, RawContent};
use crate::domain::value_objects::{PlainTextContent, SeoMetadata};
use crate::dto::ProjectDto;

/// A showcased project with repository metadata.
#[derive(Debug, Clone)]
pub struct Project {
    slug: String,
    title: String,
    description: String,
    tags: Vec<String>,
    repo_url: String,
    status: ProjectStatus,
    hero_image: Option<String>,
    demo_url: Option<String>,
    featured: bool,
    stars: Option<u32>,
    forks: Option<u32>,
    last_commit: Option<String>,
    license: Option<String>,
    content: String,
    plain_text: PlainTextContent,
    seo: Option<SeoMetadata>,
}

impl Project {
    /// Creates a project from its slug, frontmatter and Markdown body.
    pub fn create(
        slug: impl Into<String>,
        frontmatter: ProjectFrontmatter,
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
            description: frontmatter.description,
            tags: frontmatter.tags,
            repo_url: frontmatter.repo_url,
            status: frontmatter.status,
            hero_image: frontmatter.hero_image,
            demo_url: frontmatter.demo_url,
            featured: frontmatter.featured.unwrap_or(false),
            stars: frontmatter.stars,
            forks: frontmatter.forks,
            last_commit: frontmatter.last_commit,
            license: frontmatter.license,
            plain_text: PlainTextContent::from_markdown(&content),
            content,
            seo,
        }
    }

    pub fn from_raw(raw: RawContent<ProjectFrontmatter>) -> Self {
        Self::create(raw.slug, raw.frontmatter, raw.content)
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn hero_image(&self) -> Option<&str> {
        self.hero_image.as_deref()
    }

    pub fn demo_url(&self) -> Option<&str> {
        self.demo_url.as_deref()
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    pub fn stars(&self) -> Option<u32> {
        self.stars
    }

    pub fn forks(&self) -> Option<u32> {
        self.forks
    }

    pub fn last_commit(&self) -> Option<&str> {
        self.last_commit.as_deref()
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
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
            &self.description,
        )
    }

    pub fn to_dto(&self) -> ProjectDto {
        ProjectDto {
            slug: self.slug.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
            repo_url: self.repo_url.clone(),
            status: self.status,
            hero_image: self.hero_image.clone(),
            demo_url: self.demo_url.clone(),
            featured: self.featured,
            stars: self.stars,
            forks: self.forks,
            last_commit: self.last_commit.clone(),
            license: self.license.clone(),
            content: self.content.clone(),
            plain_text: self.plain_text.to_string(),
            meta_title: self.meta_title().to_string(),
            meta_description: self.meta_description().to_string(),
        }
    }
}
