//! Talk retrieval service.

use std::sync::Arc;

use crate::domain::content::{ContentKind, TalkFrontmatter};
use crate::domain::entities::Talk;
use crate::domain::repositories::ContentRepository;

use super::selection::{collect_tags, pick_featured, sort_newest_first};

/// Service for reading talks, most recent first.
pub struct TalkService<R: ContentRepository<TalkFrontmatter>> {
    repository: Arc<R>,
    directory: String,
}

impl<R: ContentRepository<TalkFrontmatter>> TalkService<R> {
    /// Creates a service reading talks from `directory`.
    pub fn new(repository: Arc<R>, directory: impl Into<String>) -> Self {
        Self {
            repository,
            directory: directory.into(),
        }
    }

    /// Creates a service reading from `<content_root>/talks`.
    pub fn with_content_root(repository: Arc<R>, content_root: &str) -> Self {
        Self::new(
            repository,
            format!("{}/{}", content_root.trim_end_matches('/'), ContentKind::Talks),
        )
    }

    /// All talks, most recent first.
    pub async fn get_all(&self) -> Vec<Talk> {
        let mut talks: Vec<Talk> = self
            .repository
            .read_all(&self.directory)
            .await
            .into_iter()
            .map(Talk::from_raw)
            .collect();

        sort_newest_first(&mut talks, Talk::held_at);
        talks
    }

    /// The talk with `slug`, or `None`.
    pub async fn get_by_slug(&self, slug: &str) -> Option<Talk> {
        self.repository
            .read_by_slug(&self.directory, slug)
            .await
            .map(Talk::from_raw)
    }

    /// Every tag used by any talk, deduplicated and sorted.
    pub async fn get_all_tags(&self) -> Vec<String> {
        self.tags_of(&self.get_all().await)
    }

    /// Tags of talks that were already fetched, deduplicated and sorted.
    pub fn tags_of(&self, talks: &[Talk]) -> Vec<String> {
        collect_tags(talks.iter().map(Talk::tags))
    }

    /// The most recent featured talk, or the most recent talk.
    pub async fn get_featured(&self) -> Option<Talk> {
        pick_featured(self.get_all().await, Talk::is_featured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::RawContent;
    use crate::domain::repositories::MockContentRepository;

    const DIR: &str = "content/talks";

    fn raw_talk(slug: &str, date: &str, featured: bool) -> RawContent<TalkFrontmatter> {
        RawContent::new(
            slug,
            TalkFrontmatter {
                title: format!("Talk {slug}"),
                event: "Meetup".to_string(),
                date: date.to_string(),
                location: "Berlin".to_string(),
                tags: vec!["rust".to_string()],
                slides_url: None,
                video_url: None,
                featured: featured.then_some(true),
                description: None,
                seo_title: None,
                seo_description: None,
            },
            "",
        )
    }

    fn service_with(
        records: Vec<RawContent<TalkFrontmatter>>,
    ) -> TalkService<MockContentRepository<TalkFrontmatter>> {
        let mut mock_repo = MockContentRepository::<TalkFrontmatter>::new();
        mock_repo
            .expect_read_all()
            .withf(|dir| dir == DIR)
            .returning(move |_| records.clone());

        TalkService::new(Arc::new(mock_repo), DIR)
    }

    #[tokio::test]
    async fn test_get_all_sorts_by_date_not_string() {
        let service = service_with(vec![
            raw_talk("morning", "2024-03-01T09:00:00Z", false),
            raw_talk("evening", "2024-03-01T10:00:00+02:00", false),
            raw_talk("later", "2024-03-01T08:30:00-01:00", false),
        ]);

        let slugs: Vec<String> = service
            .get_all()
            .await
            .iter()
            .map(|talk| talk.slug().to_string())
            .collect();
        assert_eq!(slugs, vec!["later", "morning", "evening"]);
    }

    #[tokio::test]
    async fn test_get_featured_falls_back_to_most_recent() {
        let service = service_with(vec![
            raw_talk("older", "2022-10-01", false),
            raw_talk("recent", "2024-10-01", false),
        ]);

        assert_eq!(service.get_featured().await.unwrap().slug(), "recent");
    }

    #[tokio::test]
    async fn test_get_featured_prefers_flag() {
        let service = service_with(vec![
            raw_talk("older", "2022-10-01", true),
            raw_talk("recent", "2024-10-01", false),
        ]);

        assert_eq!(service.get_featured().await.unwrap().slug(), "older");
    }

    #[tokio::test]
    async fn test_get_by_slug() {
        let mut mock_repo = MockContentRepository::<TalkFrontmatter>::new();
        let record = raw_talk("keynote", "2024-01-01", false);
        mock_repo
            .expect_read_by_slug()
            .withf(|dir, slug| dir == DIR && slug == "keynote")
            .times(1)
            .returning(move |_, _| Some(record.clone()));

        let service = TalkService::new(Arc::new(mock_repo), DIR);

        let talk = service.get_by_slug("keynote").await.unwrap();
        assert_eq!(talk.event(), "Meetup");
        assert_eq!(talk.meta_description(), "");
    }
}
