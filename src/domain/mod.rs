//! Domain layer: content records, entities and the repository contract.
//!
//! # Architecture
//!
//! - [`content`] - Raw records and the frontmatter shapes of each kind
//! - [`entities`] - Post, Project and Talk built from raw records
//! - [`value_objects`] - Plain-text body and SEO metadata
//! - [`repositories`] - The [`repositories::ContentRepository`] trait
//!
//! # Design Principles
//!
//! - The domain layer has no dependency on the filesystem or on Notion
//! - Backends hand over [`content::RawContent`]; entities never see I/O
//! - Retrieval policy (sorting, featured selection) lives in
//!   [`crate::application::services`]

pub mod content;
pub mod entities;
pub mod repositories;
pub mod value_objects;
