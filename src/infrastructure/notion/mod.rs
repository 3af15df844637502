//! Notion-backed content source.
//!
//! - [`client`] - HTTP access to data source queries and block children
//! - [`types`] - API payloads, including the typed [`Block`](types::Block) model
//! - [`block_converter`] - Blocks to Markdown
//! - [`property_mappers`] - Page properties to frontmatter

pub mod block_converter;
pub mod client;
mod notion_content_repository;
pub mod property_mappers;
pub mod types;

pub use client::{DEFAULT_API_URL, DEFAULT_NOTION_VERSION, NotionClient};
pub use notion_content_repository::{NotionContentRepository, NotionDataSources, PUBLISHED_STATUS};
