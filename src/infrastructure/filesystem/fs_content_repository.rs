//! Filesystem implementation of the content repository.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use super::front_matter;
use crate::domain::content::{Frontmatter, RawContent};
use crate::domain::repositories::ContentRepository;
use crate::error::ContentResult;

/// Extension of content files. Anything else in a content directory is ignored.
pub const CONTENT_EXTENSION: &str = "mdx";

/// Reads `<directory>/<slug>.mdx` files with a YAML front-matter header.
///
/// The slug always comes from the file name, even when the header carries a
/// `slug` field of its own.
#[derive(Debug, Clone, Default)]
pub struct FsContentRepository;

impl FsContentRepository {
    /// Creates a new filesystem repository.
    pub fn new() -> Self {
        Self
    }

    /// Lists content files in `directory`, sorted by file name.
    async fn list_content_files(directory: &Path) -> ContentResult<Vec<PathBuf>> {
        let mut entries = tokio::fs::read_dir(directory).await?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let is_content = path
                .extension()
                .is_some_and(|ext| ext == CONTENT_EXTENSION);
            if is_content && entry.file_type().await?.is_file() {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    async fn read_file<F: Frontmatter>(path: &Path, slug: &str) -> ContentResult<RawContent<F>> {
        let source = tokio::fs::read_to_string(path).await?;
        let (frontmatter, body) = front_matter::parse::<F>(&source)?;
        Ok(RawContent::new(slug, frontmatter, body))
    }
}

/// Slug derived from a content file name: the file stem.
fn slug_from_path(path: &Path) -> Option<&str> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
}

/// Slugs name a file inside the directory; anything that could escape it is refused.
fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty() && !slug.contains(['/', '\\']) && slug != "." && slug != ".."
}

#[async_trait]
impl<F: Frontmatter> ContentRepository<F> for FsContentRepository {
    async fn read_all(&self, directory: &str) -> Vec<RawContent<F>> {
        let dir = Path::new(directory);
        let files = match Self::list_content_files(dir).await {
            Ok(files) => files,
            Err(e) => {
                warn!(directory, error = %e, "Content directory unavailable, returning no content");
                return Vec::new();
            }
        };

        let mut records = Vec::with_capacity(files.len());
        for path in files {
            let Some(slug) = slug_from_path(&path) else {
                continue;
            };

            match Self::read_file::<F>(&path, slug).await {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping malformed content file");
                }
            }
        }

        debug!(directory, kind = %F::KIND, count = records.len(), "Read content directory");
        records
    }

    async fn read_by_slug(&self, directory: &str, slug: &str) -> Option<RawContent<F>> {
        if !is_safe_slug(slug) {
            debug!(slug, "Rejected slug");
            return None;
        }

        let path = Path::new(directory).join(format!("{slug}.{CONTENT_EXTENSION}"));
        match Self::read_file::<F>(&path, slug).await {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Content file not readable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_from_path() {
        assert_eq!(
            slug_from_path(Path::new("content/posts/hello-world.mdx")),
            Some("hello-world")
        );
        assert_eq!(slug_from_path(Path::new("a.b.mdx")), Some("a.b"));
    }

    #[test]
    fn test_is_safe_slug() {
        assert!(is_safe_slug("hello-world"));
        assert!(!is_safe_slug(""));
        assert!(!is_safe_slug(".."));
        assert!(!is_safe_slug("../secrets"));
        assert!(!is_safe_slug("nested/post"));
    }
}
