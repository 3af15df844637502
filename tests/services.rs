mod common;

use std::sync::Arc;

use portfolio_content::application::services::{PostService, ProjectService, TalkService};
use portfolio_content::domain::content::ProjectStatus;
use portfolio_content::infrastructure::backend::ContentBackend;
use portfolio_content::infrastructure::filesystem::FsContentRepository;

fn backend() -> Arc<ContentBackend> {
    Arc::new(ContentBackend::Filesystem(FsContentRepository::new()))
}

#[tokio::test]
async fn test_posts_end_to_end() {
    let root = common::content_root();
    let posts = root.path().join("posts");
    common::write_file(
        &posts,
        "old.mdx",
        &common::post_mdx("Old", "2023-06-01", "tags: [rust, cli]\n", "Old **news**"),
    );
    common::write_file(
        &posts,
        "new.mdx",
        &common::post_mdx(
            "New",
            "2024-06-01",
            "tags: [web, rust]\nseoTitle: New and shiny\n",
            "# New\n\nFresh",
        ),
    );
    common::write_file(
        &posts,
        "middle.mdx",
        &common::post_mdx("Middle", "2024-01-10", "featured: true\n", ""),
    );

    let service = PostService::with_content_root(backend(), root.path().to_str().unwrap());

    let all = service.get_all().await;
    let slugs: Vec<&str> = all.iter().map(|p| p.slug()).collect();
    assert_eq!(slugs, vec!["new", "middle", "old"]);

    assert_eq!(all[0].meta_title(), "New and shiny");
    assert_eq!(all[0].meta_description(), "About New");
    assert_eq!(all[0].plain_text().as_str(), "New\n\nFresh");
    assert_eq!(all[2].plain_text().as_str(), "Old news");

    assert_eq!(service.get_all_tags().await, vec!["cli", "rust", "web"]);
    assert_eq!(service.get_featured().await.unwrap().slug(), "middle");

    let dto = service.get_by_slug("old").await.unwrap().to_dto();
    assert_eq!(dto.title, "Old");
    assert!(service.get_by_slug("missing").await.is_none());
}

#[tokio::test]
async fn test_projects_sorted_by_status() {
    let root = common::content_root();
    let projects = root.path().join("projects");
    common::write_file(&projects, "a.mdx", &common::project_mdx("a", "archived", ""));
    common::write_file(&projects, "b.mdx", &common::project_mdx("b", "active", ""));
    common::write_file(&projects, "c.mdx", &common::project_mdx("c", "maintenance", ""));
    common::write_file(&projects, "d.mdx", &common::project_mdx("d", "active", ""));

    let service = ProjectService::with_content_root(backend(), root.path().to_str().unwrap());

    let all = service.get_all().await;
    let order: Vec<(&str, ProjectStatus)> = all.iter().map(|p| (p.slug(), p.status())).collect();
    assert_eq!(
        order,
        vec![
            ("b", ProjectStatus::Active),
            ("d", ProjectStatus::Active),
            ("c", ProjectStatus::Maintenance),
            ("a", ProjectStatus::Archived),
        ]
    );

    // Nothing featured: the first project in sorted order
    assert_eq!(service.get_featured().await.unwrap().slug(), "b");
}

#[tokio::test]
async fn test_talks_empty_directory() {
    let root = common::content_root();

    let service = TalkService::with_content_root(backend(), root.path().to_str().unwrap());

    assert!(service.get_all().await.is_empty());
    assert!(service.get_all_tags().await.is_empty());
    assert!(service.get_featured().await.is_none());
}

#[tokio::test]
async fn test_talks_newest_first() {
    let root = common::content_root();
    let talks = root.path().join("talks");
    common::write_file(&talks, "first.mdx", &common::talk_mdx("First", "2022-05-01", ""));
    common::write_file(
        &talks,
        "latest.mdx",
        &common::talk_mdx("Latest", "2024-11-20", "description: Most recent talk\n"),
    );

    let service = TalkService::with_content_root(backend(), root.path().to_str().unwrap());

    let all = service.get_all().await;
    assert_eq!(all[0].slug(), "latest");
    assert_eq!(all[0].meta_description(), "Most recent talk");
    assert_eq!(all[1].meta_description(), "");
}
