//! Infrastructure layer for external content sources.
//!
//! This layer implements the domain's
//! [`ContentRepository`](crate::domain::repositories::ContentRepository) for
//! each place content can live.
//!
//! # Modules
//!
//! - [`filesystem`] - MDX files with YAML front matter
//! - [`notion`] - Notion data sources over the REST API
//! - [`backend`] - Picks one of the above from configuration

pub mod backend;
pub mod filesystem;
pub mod notion;
