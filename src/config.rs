//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any content
//! is read.
//!
//! ## Content source
//!
//! By default content is read from MDX files under `CONTENT_DIR`:
//!
//! ```bash
//! export CONTENT_DIR="content"   # content/posts, content/projects, content/talks
//! ```
//!
//! Notion is used instead when the token and all three data sources are set:
//!
//! ```bash
//! export NOTION_TOKEN="secret_..."
//! export NOTION_POSTS_DATA_SOURCE_ID="..."
//! export NOTION_PROJECTS_DATA_SOURCE_ID="..."
//! export NOTION_TALKS_DATA_SOURCE_ID="..."
//! ```
//!
//! A partial Notion setup is ignored with a warning and the filesystem is used.
//!
//! ## Optional Variables
//!
//! - `NOTION_API_URL` - API base URL (default: `https://api.notion.com`)
//! - `NOTION_VERSION` - `Notion-Version` header (default: `2025-09-03`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

use crate::infrastructure::notion::{DEFAULT_API_URL, DEFAULT_NOTION_VERSION, NotionDataSources};

const NOTION_TOKEN: &str = "NOTION_TOKEN";
const NOTION_POSTS: &str = "NOTION_POSTS_DATA_SOURCE_ID";
const NOTION_PROJECTS: &str = "NOTION_PROJECTS_DATA_SOURCE_ID";
const NOTION_TALKS: &str = "NOTION_TALKS_DATA_SOURCE_ID";

/// Settings of the Notion backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotionConfig {
    pub token: String,
    pub data_sources: NotionDataSources,
    pub api_url: String,
    pub version: String,
}

/// Content configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory holding one sub-directory per content kind.
    pub content_dir: String,
    /// Present only when Notion is fully configured.
    pub notion: Option<NotionConfig>,
    /// Notion variables left unset in a partial setup; empty otherwise.
    pub notion_missing: Vec<&'static str>,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable cannot be read as UTF-8.
    pub fn from_env() -> Result<Self> {
        let content_dir = env::var("CONTENT_DIR").unwrap_or_else(|_| "content".to_string());
        let notion = Self::load_notion().context("Failed to load Notion configuration")?;
        let notion_missing = if notion.is_some() {
            Vec::new()
        } else {
            Self::missing_notion_vars()?
        };
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            content_dir,
            notion,
            notion_missing,
            log_level,
            log_format,
        })
    }

    /// Loads Notion settings.
    ///
    /// Returns `None` unless the token and all three data source ids are set
    /// and non-empty.
    fn load_notion() -> Result<Option<NotionConfig>> {
        let token = optional_var(NOTION_TOKEN)?;
        let posts = optional_var(NOTION_POSTS)?;
        let projects = optional_var(NOTION_PROJECTS)?;
        let talks = optional_var(NOTION_TALKS)?;

        let (Some(token), Some(posts), Some(projects), Some(talks)) =
            (token, posts, projects, talks)
        else {
            return Ok(None);
        };

        let api_url =
            optional_var("NOTION_API_URL")?.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let version =
            optional_var("NOTION_VERSION")?.unwrap_or_else(|| DEFAULT_NOTION_VERSION.to_string());

        Ok(Some(NotionConfig {
            token,
            data_sources: NotionDataSources {
                posts,
                projects,
                talks,
            },
            api_url,
            version,
        }))
    }

    /// Lists the unset Notion variables of a partial setup.
    ///
    /// Empty when none of them is set: the filesystem is then the intended
    /// source.
    fn missing_notion_vars() -> Result<Vec<&'static str>> {
        let mut missing = Vec::new();
        for name in [NOTION_TOKEN, NOTION_POSTS, NOTION_PROJECTS, NOTION_TALKS] {
            if optional_var(name)?.is_none() {
                missing.push(name);
            }
        }

        if missing.len() == 4 {
            missing.clear();
        }
        Ok(missing)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `content_dir` is empty
    /// - the Notion API URL is not an `http(s)` URL
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.content_dir.trim().is_empty() {
            anyhow::bail!("CONTENT_DIR must not be empty");
        }

        if let Some(ref notion) = self.notion {
            let url = url::Url::parse(&notion.api_url).with_context(|| {
                format!("NOTION_API_URL is not a valid URL: '{}'", notion.api_url)
            })?;
            if url.scheme() != "http" && url.scheme() != "https" {
                anyhow::bail!(
                    "NOTION_API_URL must start with 'http://' or 'https://', got '{}'",
                    notion.api_url
                );
            }
        }

        Ok(())
    }

    /// Returns whether content is read from Notion.
    pub fn is_notion_enabled(&self) -> bool {
        self.notion.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");

        if !self.notion_missing.is_empty() {
            tracing::warn!(
                missing = ?self.notion_missing,
                "Incomplete Notion configuration, falling back to filesystem content"
            );
        }

        if let Some(ref notion) = self.notion {
            tracing::info!("  Content source: Notion ({})", notion.api_url);
            tracing::info!("  Notion token: {}", mask_secret(&notion.token));
            tracing::info!("  Notion version: {}", notion.version);
            tracing::info!(
                "  Data sources: posts={} projects={} talks={}",
                notion.data_sources.posts,
                notion.data_sources.projects,
                notion.data_sources.talks
            );
        } else {
            tracing::info!("  Content source: filesystem ({})", self.content_dir);
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads a variable, treating unset and empty values alike.
fn optional_var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("{name} is not valid UTF-8")),
    }
}

/// Masks a secret for logging, keeping a short prefix for identification.
///
/// - `secret_abcdef123456` → `secr***`
/// - `short` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return "***".to_string();
    }
    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is unreadable or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
