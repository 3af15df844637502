//! Search-engine metadata overrides with length-bounded truncation.

/// Maximum length of a meta title, in characters.
pub const SEO_TITLE_MAX_LENGTH: usize = 60;

/// Maximum length of a meta description, in characters.
pub const SEO_DESCRIPTION_MAX_LENGTH: usize = 155;

const ELLIPSIS: &str = "...";

/// Optional SEO title/description overrides for a content entity.
///
/// Both strings are truncated to their limits when the value is created, so
/// every accessor returns text that is already safe to put in a `<meta>` tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeoMetadata {
    title: String,
    description: String,
    focus_keyword: Option<String>,
}

impl SeoMetadata {
    /// Builds metadata from raw overrides, truncating title and description.
    ///
    /// Missing values become empty strings; an empty focus keyword is treated
    /// as unset.
    pub fn create(
        title: Option<&str>,
        description: Option<&str>,
        focus_keyword: Option<&str>,
    ) -> Self {
        Self {
            title: truncate(title.unwrap_or_default(), SEO_TITLE_MAX_LENGTH),
            description: truncate(description.unwrap_or_default(), SEO_DESCRIPTION_MAX_LENGTH),
            focus_keyword: focus_keyword
                .filter(|k| !k.is_empty())
                .map(str::to_string),
        }
    }

    /// Metadata with nothing set.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn focus_keyword(&self) -> Option<&str> {
        self.focus_keyword.as_deref()
    }

    /// True when neither override nor a focus keyword is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.focus_keyword.is_none()
    }
}

/// Truncates `text` to at most `max` characters.
///
/// Longer text is cut to `max - 3` characters, backed up to the last space in
/// that window when there is one, and suffixed with `"..."`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let window_end = text
        .char_indices()
        .nth(max.saturating_sub(ELLIPSIS.len()))
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let window = &text[..window_end];

    let cut = match window.rfind(' ') {
        Some(idx) if idx > 0 => &window[..idx],
        _ => window,
    };

    format!("{cut}{ELLIPSIS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_at_limit_is_unchanged() {
        let title = "a".repeat(SEO_TITLE_MAX_LENGTH);
        let seo = SeoMetadata::create(Some(&title), None, None);
        assert_eq!(seo.title(), title);
    }

    #[test]
    fn test_long_title_is_truncated_at_word_boundary() {
        let title = "Building a content layer in Rust with two interchangeable backends";
        assert!(title.chars().count() > SEO_TITLE_MAX_LENGTH);

        let seo = SeoMetadata::create(Some(title), None, None);

        assert!(seo.title().chars().count() <= SEO_TITLE_MAX_LENGTH);
        assert!(seo.title().ends_with("..."));
        assert_eq!(
            seo.title(),
            "Building a content layer in Rust with two..."
        );
    }

    #[test]
    fn test_long_title_without_spaces_is_hard_cut() {
        let title = "x".repeat(61);
        let seo = SeoMetadata::create(Some(&title), None, None);

        assert_eq!(seo.title(), format!("{}...", "x".repeat(57)));
        assert_eq!(seo.title().chars().count(), SEO_TITLE_MAX_LENGTH);
    }

    #[test]
    fn test_description_limit() {
        let description = "word ".repeat(40);
        let seo = SeoMetadata::create(None, Some(&description), None);

        assert!(seo.description().chars().count() <= SEO_DESCRIPTION_MAX_LENGTH);
        assert!(seo.description().ends_with("word..."));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let title = "é".repeat(60);
        let seo = SeoMetadata::create(Some(&title), None, None);
        assert_eq!(seo.title(), title);

        let longer = "é".repeat(61);
        let seo = SeoMetadata::create(Some(&longer), None, None);
        assert_eq!(seo.title().chars().count(), 60);
    }

    #[test]
    fn test_is_empty() {
        assert!(SeoMetadata::empty().is_empty());
        assert!(SeoMetadata::create(None, None, None).is_empty());
        assert!(SeoMetadata::create(Some(""), Some(""), Some("")).is_empty());
        assert!(!SeoMetadata::create(None, None, Some("rust")).is_empty());
        assert!(!SeoMetadata::create(Some("Title"), None, None).is_empty());
    }
}
