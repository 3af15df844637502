//! Repository trait for read-only content access.

use crate::domain::content::{Frontmatter, RawContent};
use async_trait::async_trait;

/// Read-only access to the raw records of one frontmatter shape.
///
/// `directory` is backend-specific: a filesystem path for
/// [`crate::infrastructure::filesystem::FsContentRepository`], a logical kind
/// name (its final path segment) for
/// [`crate::infrastructure::notion::NotionContentRepository`].
///
/// Neither method can fail. Missing sources, malformed records and transport
/// errors are logged by the implementation and surface as an empty list or
/// `None`, so a broken content source renders as "no content" instead of
/// aborting a site build.
///
/// # Implementations
///
/// - [`crate::infrastructure::filesystem::FsContentRepository`] - MDX files on disk
/// - [`crate::infrastructure::notion::NotionContentRepository`] - Notion data sources
/// - [`crate::infrastructure::backend::ContentBackend`] - Runtime selection of either
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository<T: Frontmatter>: Send + Sync {
    /// Returns every published record in `directory`.
    ///
    /// Every call re-reads the source; nothing is cached.
    async fn read_all(&self, directory: &str) -> Vec<RawContent<T>>;

    /// Returns the record whose slug is `slug`, or `None` if there is none.
    async fn read_by_slug(&self, directory: &str, slug: &str) -> Option<RawContent<T>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{PostFrontmatter, ProjectFrontmatter};

    #[tokio::test]
    async fn test_mock_is_generic_over_frontmatter() {
        let mut posts = MockContentRepository::<PostFrontmatter>::new();
        posts
            .expect_read_by_slug()
            .withf(|dir, slug| dir == "content/posts" && slug == "missing")
            .times(1)
            .returning(|_, _| None);

        let mut projects = MockContentRepository::<ProjectFrontmatter>::new();
        projects
            .expect_read_all()
            .withf(|dir| dir == "content/projects")
            .times(1)
            .returning(|_| Vec::new());

        assert!(posts.read_by_slug("content/posts", "missing").await.is_none());
        assert!(projects.read_all("content/projects").await.is_empty());
    }
}
