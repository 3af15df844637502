//! Error types used inside the content backends.
//!
//! These errors never cross the [`crate::domain::repositories::ContentRepository`]
//! boundary: each backend logs them and degrades to an empty result or `None`.

use thiserror::Error;

/// Failure while reading or mapping a single content source.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Front matter error: {message}")]
    FrontMatter { message: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Notion API error ({status}): {message}")]
    NotionApi { status: u16, message: String },

    #[error("Unknown content kind: '{0}'")]
    UnknownContentKind(String),

    #[error("Page {page_id} has no slug")]
    MissingSlug { page_id: String },

    #[error("Expected {expected} frontmatter, got {actual}")]
    KindMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl ContentError {
    pub fn front_matter(message: impl Into<String>) -> Self {
        Self::FrontMatter {
            message: message.into(),
        }
    }
}

/// Result type for backend internals.
pub type ContentResult<T> = Result<T, ContentError>;
