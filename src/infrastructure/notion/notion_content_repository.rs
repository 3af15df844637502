//! Notion implementation of the content repository.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::block_converter;
use super::client::NotionClient;
use super::property_mappers;
use super::types::Page;
use crate::domain::content::{ContentKind, Frontmatter, RawContent};
use crate::domain::repositories::ContentRepository;
use crate::error::{ContentError, ContentResult};

/// Value of the `Status` select that marks a page as published.
pub const PUBLISHED_STATUS: &str = "Published";

/// Data source identifiers, one per content kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotionDataSources {
    pub posts: String,
    pub projects: String,
    pub talks: String,
}

impl NotionDataSources {
    pub fn get(&self, kind: ContentKind) -> &str {
        match kind {
            ContentKind::Posts => &self.posts,
            ContentKind::Projects => &self.projects,
            ContentKind::Talks => &self.talks,
        }
    }
}

/// Reads published pages from Notion data sources.
///
/// `directory` is reduced to its last path segment to pick the content kind,
/// so `"content/posts"` and `"posts"` read the same data source. Every failure
/// is logged and reported as missing content.
#[derive(Debug, Clone)]
pub struct NotionContentRepository {
    client: NotionClient,
    data_sources: NotionDataSources,
}

impl NotionContentRepository {
    pub fn new(client: NotionClient, data_sources: NotionDataSources) -> Self {
        Self {
            client,
            data_sources,
        }
    }

    fn resolve(&self, directory: &str) -> ContentResult<(ContentKind, &str)> {
        let kind = ContentKind::from_directory(directory)?;
        Ok((kind, self.data_sources.get(kind)))
    }

    async fn fetch_all<F: Frontmatter>(
        &self,
        directory: &str,
    ) -> ContentResult<Vec<RawContent<F>>> {
        let (kind, data_source_id) = self.resolve(directory)?;
        let pages = self
            .client
            .query_data_source(data_source_id, published_filter())
            .await?;

        let mut records = Vec::with_capacity(pages.len());
        for page in pages {
            let page_id = page.id.clone();
            match self.map_page::<F>(kind, page).await {
                Ok(record) => records.push(record),
                Err(e) => warn!(page_id = %page_id, error = %e, "Skipping unmappable Notion page"),
            }
        }

        debug!(directory, %kind, count = records.len(), "Read Notion content");
        Ok(records)
    }

    async fn fetch_by_slug<F: Frontmatter>(
        &self,
        directory: &str,
        slug: &str,
    ) -> ContentResult<Option<RawContent<F>>> {
        let (kind, data_source_id) = self.resolve(directory)?;
        let page = self
            .client
            .query_first(data_source_id, slug_filter(slug))
            .await?;

        match page {
            Some(page) => self.map_page::<F>(kind, page).await.map(Some),
            None => Ok(None),
        }
    }

    /// Builds a raw record from a page: slug, Markdown body and frontmatter.
    async fn map_page<F: Frontmatter>(
        &self,
        kind: ContentKind,
        page: Page,
    ) -> ContentResult<RawContent<F>> {
        let slug = property_mappers::extract_slug(&page.properties).ok_or_else(|| {
            ContentError::MissingSlug {
                page_id: page.id.clone(),
            }
        })?;

        let blocks = self.client.list_block_children(&page.id).await?;
        let content = block_converter::convert(&blocks);
        let frontmatter = F::try_from(property_mappers::map_properties(kind, &page.properties))?;

        Ok(RawContent::new(slug, frontmatter, content))
    }
}

fn published_filter() -> Value {
    json!({
        "property": "Status",
        "select": { "equals": PUBLISHED_STATUS }
    })
}

fn slug_filter(slug: &str) -> Value {
    json!({
        "and": [
            { "property": "Slug", "rich_text": { "equals": slug } },
            published_filter()
        ]
    })
}

#[async_trait]
impl<F: Frontmatter> ContentRepository<F> for NotionContentRepository {
    async fn read_all(&self, directory: &str) -> Vec<RawContent<F>> {
        self.fetch_all::<F>(directory).await.unwrap_or_else(|e| {
            warn!(directory, error = %e, "Notion query failed, returning no content");
            Vec::new()
        })
    }

    async fn read_by_slug(&self, directory: &str, slug: &str) -> Option<RawContent<F>> {
        self.fetch_by_slug::<F>(directory, slug)
            .await
            .unwrap_or_else(|e| {
                warn!(directory, slug, error = %e, "Notion lookup failed, treating as not found");
                None
            })
    }
}
