//! Runtime selection of the content backend.

use async_trait::async_trait;

use super::filesystem::FsContentRepository;
use super::notion::{NotionClient, NotionContentRepository};
use crate::config::Config;
use crate::domain::content::{Frontmatter, RawContent};
use crate::domain::repositories::ContentRepository;

/// The configured content source.
///
/// Notion is used when it is fully configured, the filesystem otherwise. Both
/// variants serve every frontmatter kind, so one backend is shared by all
/// services.
#[derive(Debug, Clone)]
pub enum ContentBackend {
    Filesystem(FsContentRepository),
    Notion(NotionContentRepository),
}

impl ContentBackend {
    pub fn from_config(config: &Config) -> Self {
        match &config.notion {
            Some(notion) => {
                let client = NotionClient::new(&notion.token, &notion.api_url, &notion.version);
                Self::Notion(NotionContentRepository::new(
                    client,
                    notion.data_sources.clone(),
                ))
            }
            None => Self::Filesystem(FsContentRepository::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Filesystem(_) => "filesystem",
            Self::Notion(_) => "notion",
        }
    }
}

#[async_trait]
impl<F: Frontmatter> ContentRepository<F> for ContentBackend {
    async fn read_all(&self, directory: &str) -> Vec<RawContent<F>> {
        match self {
            Self::Filesystem(repo) => ContentRepository::<F>::read_all(repo, directory).await,
            Self::Notion(repo) => ContentRepository::<F>::read_all(repo, directory).await,
        }
    }

    async fn read_by_slug(&self, directory: &str, slug: &str) -> Option<RawContent<F>> {
        match self {
            Self::Filesystem(repo) => {
                ContentRepository::<F>::read_by_slug(repo, directory, slug).await
            }
            Self::Notion(repo) => ContentRepository::<F>::read_by_slug(repo, directory, slug).await,
        }
    }
}
