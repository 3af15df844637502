//! Minimal Notion REST client.
//!
//! Covers the two endpoints the content backend needs: querying a data source
//! and listing the children of a block. Both are cursor-paginated and fetched
//! sequentially until the API reports no more results.

use std::fmt;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::types::{ApiErrorBody, Block, Page, PaginatedList};
use crate::error::{ContentError, ContentResult};

pub const DEFAULT_API_URL: &str = "https://api.notion.com";
pub const DEFAULT_NOTION_VERSION: &str = "2025-09-03";

/// Largest page size accepted by the API.
const PAGE_SIZE: u32 = 100;

/// Read-only handle to the Notion API. Cheap to clone.
#[derive(Clone)]
pub struct NotionClient {
    http: Client,
    base_url: String,
    token: String,
    version: String,
}

impl NotionClient {
    pub fn new(
        token: impl Into<String>,
        base_url: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            version: version.into(),
        }
    }

    /// Returns every page of the data source matching `filter`.
    pub async fn query_data_source(
        &self,
        data_source_id: &str,
        filter: Value,
    ) -> ContentResult<Vec<Page>> {
        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let batch = self
                .query_batch(data_source_id, &filter, cursor.as_deref(), PAGE_SIZE)
                .await?;
            pages.extend(batch.results);

            match batch.next_cursor {
                Some(next) if batch.has_more => cursor = Some(next),
                _ => break,
            }
        }

        tracing::debug!(data_source_id, count = pages.len(), "Queried data source");
        Ok(pages)
    }

    /// Returns the first page of the data source matching `filter`, if any.
    pub async fn query_first(
        &self,
        data_source_id: &str,
        filter: Value,
    ) -> ContentResult<Option<Page>> {
        let batch = self.query_batch(data_source_id, &filter, None, 1).await?;
        Ok(batch.results.into_iter().next())
    }

    /// Returns all direct children of a block (or page), following cursors.
    pub async fn list_block_children(&self, block_id: &str) -> ContentResult<Vec<Block>> {
        let url = format!("{}/v1/blocks/{}/children", self.base_url, block_id);
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut request = self
                .authorized(self.http.get(&url))
                .query(&[("page_size", PAGE_SIZE.to_string())]);
            if let Some(start) = &cursor {
                request = request.query(&[("start_cursor", start)]);
            }

            let batch: PaginatedList<Block> = self.send(request).await?;
            blocks.extend(batch.results);

            match batch.next_cursor {
                Some(next) if batch.has_more => cursor = Some(next),
                _ => break,
            }
        }

        tracing::debug!(block_id, count = blocks.len(), "Fetched block children");
        Ok(blocks)
    }

    async fn query_batch(
        &self,
        data_source_id: &str,
        filter: &Value,
        cursor: Option<&str>,
        page_size: u32,
    ) -> ContentResult<PaginatedList<Page>> {
        let url = format!("{}/v1/data_sources/{}/query", self.base_url, data_source_id);
        let mut body = json!({
            "filter": filter,
            "page_size": page_size,
        });
        if let Some(start) = cursor {
            body["start_cursor"] = Value::from(start);
        }

        let request = self.authorized(self.http.post(&url)).json(&body);
        self.send(request).await
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.version)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ContentResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) if !body.message.is_empty() => format!("{}: {}", body.code, body.message),
                _ => status.canonical_reason().unwrap_or("unknown error").to_string(),
            };
            return Err(ContentError::NotionApi {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

impl fmt::Debug for NotionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotionClient")
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .field("token", &"***")
            .finish()
    }
}
