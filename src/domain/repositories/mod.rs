//! Repository trait definitions for the domain layer.
//!
//! The domain depends only on [`ContentRepository`]; the filesystem and Notion
//! implementations live in `crate::infrastructure`.
//!
//! # Testing
//!
//! A mock implementation is generated via `mockall` for service tests. See the
//! integration tests in `tests/repository_*.rs` for the concrete backends.

pub mod content_repository;

pub use content_repository::ContentRepository;

#[cfg(test)]
pub use content_repository::MockContentRepository;
