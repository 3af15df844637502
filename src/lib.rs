//! # Portfolio Content
//!
//! The content layer of a portfolio site: blog posts, projects and talks read
//! from MDX files or from a Notion workspace and normalized into one domain
//! model with computed SEO fields.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, value objects and the repository trait
//! - **Application Layer** ([`application`]) - Retrieval use cases per content kind
//! - **Infrastructure Layer** ([`infrastructure`]) - Filesystem and Notion backends
//! - **DTOs** ([`dto`]) - Serializable projections handed to the site
//!
//! ## Quick Start
//!
//! ```bash
//! # Filesystem content under ./content/{posts,projects,talks}
//! portfolio-content list posts
//!
//! # Or read from Notion
//! export NOTION_TOKEN="secret_..."
//! export NOTION_POSTS_DATA_SOURCE_ID="..."
//! export NOTION_PROJECTS_DATA_SOURCE_ID="..."
//! export NOTION_TALKS_DATA_SOURCE_ID="..."
//! portfolio-content export --out public/data
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod dto;
pub mod error;
pub mod infrastructure;
pub mod telemetry;
pub mod utils;

pub use error::{ContentError, ContentResult};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{PostService, ProjectService, TalkService};
    pub use crate::domain::content::{
        ContentKind, PostFrontmatter, ProjectFrontmatter, ProjectStatus, RawContent,
        TalkFrontmatter,
    };
    pub use crate::domain::entities::{Post, Project, Talk};
    pub use crate::domain::repositories::ContentRepository;
    pub use crate::error::ContentError;
    pub use crate::infrastructure::backend::ContentBackend;
    pub use crate::infrastructure::filesystem::FsContentRepository;
    pub use crate::infrastructure::notion::{
        NotionClient, NotionContentRepository, NotionDataSources,
    };
}
