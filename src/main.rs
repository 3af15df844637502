//! Command-line access to the content layer.
//!
//! Prints posts, projects and talks as JSON DTOs, or exports all of them to a
//! directory for a static site build to pick up.
//!
//! # Usage
//!
//! ```bash
//! # All posts, newest first
//! portfolio-content list posts
//!
//! # One project by slug
//! portfolio-content get projects rill
//!
//! # Sorted tag list / featured talk
//! portfolio-content tags talks
//! portfolio-content featured talks
//!
//! # Write posts.json, posts-tags.json, ... into public/data
//! portfolio-content export --out public/data
//! ```
//!
//! # Environment Variables
//!
//! See [`portfolio_content::config`]. A `.env` file is loaded if present.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use serde_json::Value;

use portfolio_content::application::services::{PostService, ProjectService, TalkService};
use portfolio_content::config;
use portfolio_content::domain::content::ContentKind;
use portfolio_content::domain::entities::{Post, Project, Talk};
use portfolio_content::infrastructure::backend::ContentBackend;
use portfolio_content::telemetry;

/// Read portfolio content from MDX files or Notion.
#[derive(Parser)]
#[command(name = "portfolio-content")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all entries of a kind (posts, projects, talks)
    List { kind: ContentKind },

    /// Show one entry by slug
    Get { kind: ContentKind, slug: String },

    /// List the distinct tags of a kind
    Tags { kind: ContentKind },

    /// Show the featured entry of a kind
    Featured { kind: ContentKind },

    /// Export every kind as JSON files
    Export {
        /// Output directory, created if missing
        #[arg(short, long, default_value = "public/content")]
        out: PathBuf,
    },
}

/// The three retrieval services over one shared backend.
struct Catalog {
    posts: PostService<ContentBackend>,
    projects: ProjectService<ContentBackend>,
    talks: TalkService<ContentBackend>,
}

impl Catalog {
    fn new(backend: Arc<ContentBackend>, content_root: &str) -> Self {
        Self {
            posts: PostService::with_content_root(Arc::clone(&backend), content_root),
            projects: ProjectService::with_content_root(Arc::clone(&backend), content_root),
            talks: TalkService::with_content_root(backend, content_root),
        }
    }

    async fn list(&self, kind: ContentKind) -> Result<Value> {
        Ok(self.list_with_tags(kind).await?.0)
    }

    /// All entries of a kind plus their tags, from a single backend read.
    async fn list_with_tags(&self, kind: ContentKind) -> Result<(Value, Vec<String>)> {
        match kind {
            ContentKind::Posts => {
                let posts = self.posts.get_all().await;
                Ok((to_json(posts.iter().map(Post::to_dto))?, self.posts.tags_of(&posts)))
            }
            ContentKind::Projects => {
                let projects = self.projects.get_all().await;
                let tags = self.projects.tags_of(&projects);
                Ok((to_json(projects.iter().map(Project::to_dto))?, tags))
            }
            ContentKind::Talks => {
                let talks = self.talks.get_all().await;
                Ok((to_json(talks.iter().map(Talk::to_dto))?, self.talks.tags_of(&talks)))
            }
        }
    }

    async fn get(&self, kind: ContentKind, slug: &str) -> Result<Option<Value>> {
        let value = match kind {
            ContentKind::Posts => self
                .posts
                .get_by_slug(slug)
                .await
                .map(|p| serde_json::to_value(p.to_dto())),
            ContentKind::Projects => self
                .projects
                .get_by_slug(slug)
                .await
                .map(|p| serde_json::to_value(p.to_dto())),
            ContentKind::Talks => self
                .talks
                .get_by_slug(slug)
                .await
                .map(|t| serde_json::to_value(t.to_dto())),
        };
        value.transpose().context("Failed to serialize entry")
    }

    async fn tags(&self, kind: ContentKind) -> Vec<String> {
        match kind {
            ContentKind::Posts => self.posts.get_all_tags().await,
            ContentKind::Projects => self.projects.get_all_tags().await,
            ContentKind::Talks => self.talks.get_all_tags().await,
        }
    }

    async fn featured(&self, kind: ContentKind) -> Result<Option<Value>> {
        let value = match kind {
            ContentKind::Posts => self
                .posts
                .get_featured()
                .await
                .map(|p| serde_json::to_value(p.to_dto())),
            ContentKind::Projects => self
                .projects
                .get_featured()
                .await
                .map(|p| serde_json::to_value(p.to_dto())),
            ContentKind::Talks => self
                .talks
                .get_featured()
                .await
                .map(|t| serde_json::to_value(t.to_dto())),
        };
        value.transpose().context("Failed to serialize entry")
    }
}

fn to_json<T: Serialize>(items: impl Iterator<Item = T>) -> Result<Value> {
    serde_json::to_value(items.collect::<Vec<_>>()).context("Failed to serialize entries")
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    telemetry::init_logging(&config.log_level, &config.log_format);
    config.print_summary();

    let backend = Arc::new(ContentBackend::from_config(&config));
    tracing::debug!(backend = backend.name(), "Content backend selected");
    let catalog = Catalog::new(backend, &config.content_dir);

    match cli.command {
        Commands::List { kind } => print_json(&catalog.list(kind).await?)?,
        Commands::Get { kind, slug } => match catalog.get(kind, &slug).await? {
            Some(entry) => print_json(&entry)?,
            None => anyhow::bail!("No {} entry with slug '{}'", kind, slug),
        },
        Commands::Tags { kind } => print_json(&catalog.tags(kind).await)?,
        Commands::Featured { kind } => match catalog.featured(kind).await? {
            Some(entry) => print_json(&entry)?,
            None => anyhow::bail!("No {} entries found", kind),
        },
        Commands::Export { out } => export(&catalog, &out).await?,
    }

    Ok(())
}

/// Writes `<kind>.json` and `<kind>-tags.json` for every content kind.
///
/// # Output Format
///
/// ```text
/// 📦 Exported content to public/content
///
///   posts        12 entries   9 tags
///   projects      4 entries   7 tags
///   talks         0 entries   0 tags   (empty)
/// ```
async fn export(catalog: &Catalog, out: &Path) -> Result<()> {
    tokio::fs::create_dir_all(out)
        .await
        .with_context(|| format!("Failed to create {}", out.display()))?;

    let mut rows = Vec::with_capacity(ContentKind::ALL.len());
    for kind in ContentKind::ALL {
        let (entries, tags) = catalog.list_with_tags(kind).await?;
        let count = entries.as_array().map_or(0, Vec::len);

        write_json(&out.join(format!("{kind}.json")), &entries).await?;
        write_json(&out.join(format!("{kind}-tags.json")), &tags).await?;
        rows.push((kind, count, tags.len()));
    }

    println!(
        "{} {}",
        "📦 Exported content to".bright_blue().bold(),
        out.display().to_string().cyan()
    );
    println!();
    for (kind, count, tag_count) in rows {
        let line = format!(
            "  {:<10} {:>4} entries {:>4} tags",
            kind.as_str(),
            count,
            tag_count
        );
        if count == 0 {
            println!("{}   {}", line.yellow(), "(empty)".bright_black());
        } else {
            println!("{}", line.green());
        }
    }
    println!();

    Ok(())
}

async fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Wrote export file");
    Ok(())
}
