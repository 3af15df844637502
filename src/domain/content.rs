//! Raw content records and the frontmatter shapes of the three content kinds.
//!
//! Every backend hands records to the domain layer as [`RawContent`], carrying
//! one of the fixed frontmatter shapes: [`PostFrontmatter`],
//! [`ProjectFrontmatter`] or [`TalkFrontmatter`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::error::ContentError;

/// The three content kinds the site knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Posts,
    Projects,
    Talks,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [
        ContentKind::Posts,
        ContentKind::Projects,
        ContentKind::Talks,
    ];

    /// Logical name, also the default directory name for the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Posts => "posts",
            ContentKind::Projects => "projects",
            ContentKind::Talks => "talks",
        }
    }

    /// Resolves the kind from a directory string by its final path segment.
    ///
    /// `"content/posts"`, `"posts/"` and `"posts"` all resolve to [`ContentKind::Posts`].
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::UnknownContentKind`] if the final segment does not
    /// name one of the three kinds.
    pub fn from_directory(directory: &str) -> Result<Self, ContentError> {
        let segment = directory
            .split(['/', '\\'])
            .filter(|s| !s.is_empty())
            .last()
            .unwrap_or_default();
        segment.parse()
    }
}

impl FromStr for ContentKind {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "posts" => Ok(ContentKind::Posts),
            "projects" => Ok(ContentKind::Projects),
            "talks" => Ok(ContentKind::Talks),
            other => Err(ContentError::UnknownContentKind(other.to_string())),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record as returned by any repository backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RawContent<F> {
    pub slug: String,
    pub frontmatter: F,
    pub content: String,
}

impl<F> RawContent<F> {
    pub fn new(slug: impl Into<String>, frontmatter: F, content: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            frontmatter,
            content: content.into(),
        }
    }
}

/// Metadata header of a blog post.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFrontmatter {
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    pub date: String,
    #[serde(default)]
    pub reading_time: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub focus_keyword: Option<String>,
}

/// Lifecycle state of a project, in display priority order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Maintenance,
    Archived,
}

impl ProjectStatus {
    /// Sort priority: active (0) < maintenance (1) < archived (2).
    pub fn priority(&self) -> u8 {
        match self {
            ProjectStatus::Active => 0,
            ProjectStatus::Maintenance => 1,
            ProjectStatus::Archived => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Maintenance => "maintenance",
            ProjectStatus::Archived => "archived",
        }
    }

    /// Lenient conversion used for CMS select values: anything outside the
    /// closed set becomes [`ProjectStatus::Active`].
    pub fn from_select(value: Option<&str>) -> Self {
        match value {
            Some("maintenance") => ProjectStatus::Maintenance,
            Some("archived") => ProjectStatus::Archived,
            _ => ProjectStatus::Active,
        }
    }
}

/// Metadata header of a project.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFrontmatter {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub repo_url: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub stars: Option<u32>,
    #[serde(default)]
    pub forks: Option<u32>,
    #[serde(default)]
    pub last_commit: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

/// Metadata header of a conference talk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkFrontmatter {
    pub title: String,
    pub event: String,
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub slides_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

/// Frontmatter of any kind, as produced by a backend that decides the shape
/// at runtime (the Notion property mappers).
#[derive(Debug, Clone, PartialEq)]
pub enum AnyFrontmatter {
    Post(PostFrontmatter),
    Project(ProjectFrontmatter),
    Talk(TalkFrontmatter),
}

impl AnyFrontmatter {
    fn kind_name(&self) -> &'static str {
        match self {
            AnyFrontmatter::Post(_) => "post",
            AnyFrontmatter::Project(_) => "project",
            AnyFrontmatter::Talk(_) => "talk",
        }
    }
}

/// A frontmatter shape a repository can produce.
///
/// Deserializable from a YAML header (filesystem backend) and extractable
/// from [`AnyFrontmatter`] (Notion backend).
pub trait Frontmatter:
    DeserializeOwned + TryFrom<AnyFrontmatter, Error = ContentError> + Clone + Send + Sync + 'static
{
    const KIND: ContentKind;
}

macro_rules! impl_frontmatter {
    ($ty:ty, $variant:ident, $kind:expr, $name:literal) => {
        impl TryFrom<AnyFrontmatter> for $ty {
            type Error = ContentError;

            fn try_from(value: AnyFrontmatter) -> Result<Self, Self::Error> {
                match value {
                    AnyFrontmatter::$variant(fm) => Ok(fm),
                    other => Err(ContentError::KindMismatch {
                        expected: $name,
                        actual: other.kind_name(),
                    }),
                }
            }
        }

        impl Frontmatter for $ty {
            const KIND: ContentKind = $kind;
        }
    };
}

impl_frontmatter!(PostFrontmatter, Post, ContentKind::Posts, "post");
impl_frontmatter!(ProjectFrontmatter, Project, ContentKind::Projects, "project");
impl_frontmatter!(TalkFrontmatter, Talk, ContentKind::Talks, "talk");
