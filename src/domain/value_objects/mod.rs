//! Immutable value objects owned by the content entities.
//!
//! - [`PlainTextContent`] - Markup-free body text
//! - [`SeoMetadata`] - Truncated SEO title/description overrides

pub mod plain_text_content;
pub mod seo_metadata;

pub use plain_text_content::PlainTextContent;
pub use seo_metadata::{SEO_DESCRIPTION_MAX_LENGTH, SEO_TITLE_MAX_LENGTH, SeoMetadata};
