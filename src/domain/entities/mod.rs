//! Content entities built from raw repository records.
//!
//! Each entity is constructed once from `(slug, frontmatter, content)` and is
//! immutable afterwards. Construction derives the [`PlainTextContent`] of the
//! body and, when the frontmatter carries SEO overrides, a [`SeoMetadata`].
//!
//! # Entity Types
//!
//! - [`Post`] - A blog post
//! - [`Project`] - An open-source project
//! - [`Talk`] - A conference or meetup talk
//!
//! # SEO fallback
//!
//! `meta_title()` and `meta_description()` return the override when one is
//! set and non-empty, and the primary title/description field otherwise.
//!
//! [`PlainTextContent`]: crate::domain::value_objects::PlainTextContent

pub mod post;
pub mod project;
pub mod talk;

pub use post::Post;
pub use project::Project;
pub use talk::Talk;

use crate::domain::value_objects::SeoMetadata;

/// Builds SEO metadata only when a title or description override is present.
fn seo_from_overrides(
    seo_title: Option<&str>,
    seo_description: Option<&str>,
    focus_keyword: Option<&str>,
) -> Option<SeoMetadata> {
    let has_override = [seo_title, seo_description]
        .into_iter()
        .flatten()
        .any(|value| !value.is_empty());

    has_override.then(|| SeoMetadata::create(seo_title, seo_description, focus_keyword))
}

/// Picks the override when it is non-empty, otherwise the fallback.
fn with_fallback<'a>(override_value: Option<&'a str>, fallback: &'a str) -> &'a str {
    override_value
        .filter(|value| !value.is_empty())
        .unwrap_or(fallback)
}
