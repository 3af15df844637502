//! Project retrieval service.

use std::sync::Arc;

use crate::domain::content::{ContentKind, ProjectFrontmatter};
use crate::domain::entities::Project;
use crate::domain::repositories::ContentRepository;

use super::selection::{collect_tags, pick_featured};

/// Service for reading projects.
///
/// Projects are ordered by status (active, then maintenance, then archived);
/// within a status the repository order is kept.
pub struct ProjectService<R: ContentRepository<ProjectFrontmatter>> {
    repository: Arc<R>,
    directory: String,
}

impl<R: ContentRepository<ProjectFrontmatter>> ProjectService<R> {
    /// Creates a service reading projects from `directory`.
    pub fn new(repository: Arc<R>, directory: impl Into<String>) -> Self {
        Self {
            repository,
            directory: directory.into(),
        }
    }

    /// Creates a service reading from `<content_root>/projects`.
    pub fn with_content_root(repository: Arc<R>, content_root: &str) -> Self {
        Self::new(
            repository,
            format!(
                "{}/{}",
                content_root.trim_end_matches('/'),
                ContentKind::Projects
            ),
        )
    }

    /// All projects ordered by status priority.
    pub async fn get_all(&self) -> Vec<Project> {
        let mut projects: Vec<Project> = self
            .repository
            .read_all(&self.directory)
            .await
            .into_iter()
            .map(Project::from_raw)
            .collect();

        projects.sort_by_key(|project| project.status().priority());
        projects
    }

    /// The project with `slug`, or `None`.
    pub async fn get_by_slug(&self, slug: &str) -> Option<Project> {
        self.repository
            .read_by_slug(&self.directory, slug)
            .await
            .map(Project::from_raw)
    }

    /// Every tag used by any project, deduplicated and sorted.
    pub async fn get_all_tags(&self) -> Vec<String> {
        self.tags_of(&self.get_all().await)
    }

    /// Tags of projects that were already fetched, deduplicated and sorted.
    pub fn tags_of(&self, projects: &[Project]) -> Vec<String> {
        collect_tags(projects.iter().map(Project::tags))
    }

    /// The first featured project in status order, else the first project.
    pub async fn get_featured(&self) -> Option<Project> {
        pick_featured(self.get_all().await, Project::is_featured)
    }
}
