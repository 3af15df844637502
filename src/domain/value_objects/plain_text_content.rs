//! Markup-free rendition of a content body.

use regex::{Captures, Regex};
use std::fmt;
use std::sync::LazyLock;

static FENCED_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static MDX_STATEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(?:import|export)\s.*$").unwrap());
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>\n]+>").unwrap());
static IMAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").unwrap());
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]+").unwrap());
// Emphasis needs non-whitespace just inside both delimiters: `2 * 3 * 4` is not italic.
static BOLD_STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*\s](?:[^*\n]*[^*\s])?)\*\*").unwrap());
static BOLD_UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([^_\s](?:[^_\n]*[^_\s])?)__").unwrap());
static ITALIC_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\s](?:[^*\n]*[^*\s])?)\*").unwrap());
static ITALIC_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^_\s](?:[^_\n]*[^_\s])?)_").unwrap());
static STRIKETHROUGH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~([^~\s](?:[^~\n]*[^~\s])?)~~").unwrap());
static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(?:[-*_][ \t]*){3,}$").unwrap());
static BLOCKQUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ \t]*>[ \t]?").unwrap());
static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*+][ \t]+").unwrap());
static ORDERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\d+\.[ \t]+").unwrap());
static INLINE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Plain text derived from a Markdown/MDX body, suitable for previews,
/// search indexing and text-to-speech.
///
/// Computed once at construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainTextContent(String);

impl PlainTextContent {
    /// Strips Markdown, MDX statements and HTML/JSX tags from `markdown`.
    ///
    /// Fenced code blocks and images are removed entirely; links, emphasis and
    /// inline code keep their text. Whitespace is normalized: runs of spaces
    /// collapse to one, lines are trimmed, and at most one blank line is kept
    /// between paragraphs.
    pub fn from_markdown(markdown: &str) -> Self {
        let text = FENCED_CODE.replace_all(markdown, "");
        let text = MDX_STATEMENT.replace_all(&text, "");
        let text = HTML_TAG.replace_all(&text, "");
        let text = IMAGE.replace_all(&text, "");
        let text = LINK.replace_all(&text, "$1");
        let text = INLINE_CODE.replace_all(&text, "$1");
        let text = HEADING.replace_all(&text, "");
        let text = HORIZONTAL_RULE.replace_all(&text, "");
        let text = BLOCKQUOTE.replace_all(&text, "");
        let text = BULLET.replace_all(&text, "");
        let text = ORDERED.replace_all(&text, "");
        // Emphasis after block markers so `* item` is not read as italics.
        let text = BOLD_STARS.replace_all(&text, "$1");
        let text = strip_underscore_emphasis(&text, &BOLD_UNDERSCORES, true);
        let text = ITALIC_STAR.replace_all(&text, "$1");
        let text = strip_underscore_emphasis(&text, &ITALIC_UNDERSCORE, false);
        let text = STRIKETHROUGH.replace_all(&text, "$1");

        Self(normalize_whitespace(&text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PlainTextContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Underscore emphasis never opens or closes inside a word, so `snake_case_name`
/// is left alone. With `keep_identifiers`, a bare identifier such as `__init__`
/// is kept as well.
fn strip_underscore_emphasis(text: &str, pattern: &Regex, keep_identifiers: bool) -> String {
    pattern
        .replace_all(text, |caps: &Captures| {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                return String::new();
            };
            let before = text[..whole.start()].chars().next_back();
            let after = text[whole.end()..].chars().next();
            let intraword = before.is_some_and(is_word_char) || after.is_some_and(is_word_char);
            let identifier = keep_identifiers && inner.as_str().chars().all(is_word_char);

            if intraword || identifier {
                whole.as_str().to_string()
            } else {
                inner.as_str().to_string()
            }
        })
        .into_owned()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn normalize_whitespace(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| INLINE_WHITESPACE.replace_all(line.trim(), " ").into_owned())
        .collect();
    let joined = lines.join("\n");

    EXCESS_NEWLINES
        .replace_all(&joined, "\n\n")
        .trim()
        .to_string()
}
