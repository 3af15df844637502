//! Blog post retrieval service.

use std::sync::Arc;

use crate::domain::content::{ContentKind, PostFrontmatter};
use crate::domain::entities::Post;
use crate::domain::repositories::ContentRepository;

use super::selection::{collect_tags, pick_featured, sort_newest_first};

/// Service for reading blog posts.
///
/// Every call goes back to the repository; results are not cached.
pub struct PostService<R: ContentRepository<PostFrontmatter>> {
    repository: Arc<R>,
    directory: String,
}

impl<R: ContentRepository<PostFrontmatter>> PostService<R> {
    /// Creates a service reading posts from `directory`.
    pub fn new(repository: Arc<R>, directory: impl Into<String>) -> Self {
        Self {
            repository,
            directory: directory.into(),
        }
    }

    /// Creates a service reading from `<content_root>/posts`.
    pub fn with_content_root(repository: Arc<R>, content_root: &str) -> Self {
        Self::new(
            repository,
            format!("{}/{}", content_root.trim_end_matches('/'), ContentKind::Posts),
        )
    }

    /// All posts, newest first.
    pub async fn get_all(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .repository
            .read_all(&self.directory)
            .await
            .into_iter()
            .map(Post::from_raw)
            .collect();

        sort_newest_first(&mut posts, Post::published_at);
        posts
    }

    /// The post with `slug`, or `None`.
    pub async fn get_by_slug(&self, slug: &str) -> Option<Post> {
        self.repository
            .read_by_slug(&self.directory, slug)
            .await
            .map(Post::from_raw)
    }

    /// Every tag used by any post, deduplicated and sorted.
    pub async fn get_all_tags(&self) -> Vec<String> {
        self.tags_of(&self.get_all().await)
    }

    /// Tags of posts that were already fetched, deduplicated and sorted.
    pub fn tags_of(&self, posts: &[Post]) -> Vec<String> {
        collect_tags(posts.iter().map(Post::tags))
    }

    /// The newest featured post, or the newest post if none is featured.
    pub async fn get_featured(&self) -> Option<Post> {
        pick_featured(self.get_all().await, Post::is_featured)
    }
}
