//! Conversion of Notion blocks to Markdown.
//!
//! Blocks are converted one by one and joined with a blank line. Children of
//! nested blocks are not fetched, so only flat block lists are rendered.

use super::types::{Block, RichText};

/// Renders a list of blocks as a Markdown document.
///
/// Blocks with no Markdown counterpart produce nothing and leave no extra
/// blank lines behind.
pub fn convert(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(block_to_markdown)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn block_to_markdown(block: &Block) -> String {
    match block {
        Block::Paragraph(text) => rich_text_to_markdown(&text.rich_text),
        Block::Heading { level, text } => format!(
            "{} {}",
            "#".repeat(usize::from(*level)),
            rich_text_to_markdown(&text.rich_text)
        ),
        Block::BulletedListItem(text) => format!("- {}", rich_text_to_markdown(&text.rich_text)),
        Block::NumberedListItem(text) => format!("1. {}", rich_text_to_markdown(&text.rich_text)),
        Block::Code(code) => format!(
            "```{}\n{}\n```",
            code.language.as_deref().unwrap_or_default(),
            plain_text(&code.rich_text)
        ),
        Block::Quote(text) => format!("> {}", rich_text_to_markdown(&text.rich_text)),
        Block::Callout(callout) => {
            let text = rich_text_to_markdown(&callout.rich_text);
            match callout.emoji() {
                Some(emoji) => format!("> {emoji} {text}"),
                None => format!("> {text}"),
            }
        }
        Block::Image(image) => {
            let caption = plain_text(&image.caption);
            let alt = if caption.is_empty() { "image" } else { &caption };
            format!("![{alt}]({})", image.url().unwrap_or_default())
        }
        Block::Divider => "---".to_string(),
        Block::Unsupported(_) => String::new(),
    }
}

/// Renders rich text runs as inline Markdown.
///
/// Each run is wrapped bold, italic, code and strikethrough from the inside
/// out, and the result is wrapped in a link when the run has an `href`.
pub fn rich_text_to_markdown(runs: &[RichText]) -> String {
    runs.iter().map(run_to_markdown).collect()
}

fn run_to_markdown(run: &RichText) -> String {
    let mut text = run.plain_text.clone();
    let annotations = &run.annotations;

    if annotations.bold {
        text = format!("**{text}**");
    }
    if annotations.italic {
        text = format!("*{text}*");
    }
    if annotations.code {
        text = format!("`{text}`");
    }
    if annotations.strikethrough {
        text = format!("~~{text}~~");
    }
    if let Some(href) = &run.href {
        text = format!("[{text}]({href})");
    }

    text
}

fn plain_text(runs: &[RichText]) -> String {
    runs.iter().map(|run| run.plain_text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::notion::types::{
        Annotations, CalloutBlock, CodeBlock, FileUrl, Icon, ImageBlock, TextBlock,
    };

    fn run(text: &str) -> RichText {
        RichText {
            plain_text: text.to_string(),
            ..Default::default()
        }
    }

    fn text(content: &str) -> TextBlock {
        TextBlock {
            rich_text: vec![run(content)],
        }
    }

    #[test]
    fn test_heading_and_paragraph() {
        let blocks = vec![
            Block::Heading {
                level: 1,
                text: text("H1"),
            },
            Block::Paragraph(text("body")),
        ];

        assert_eq!(convert(&blocks), "# H1\n\nbody");
    }

    #[test]
    fn test_heading_levels() {
        let blocks = vec![
            Block::Heading {
                level: 2,
                text: text("Two"),
            },
            Block::Heading {
                level: 3,
                text: text("Three"),
            },
        ];

        assert_eq!(convert(&blocks), "## Two\n\n### Three");
    }

    #[test]
    fn test_callout_with_emoji() {
        let blocks = vec![Block::Callout(CalloutBlock {
            rich_text: vec![run("Note")],
            icon: Some(Icon::Emoji {
                emoji: "💡".to_string(),
            }),
        })];

        assert_eq!(convert(&blocks), "> 💡 Note");
    }

    #[test]
    fn test_callout_without_emoji() {
        let blocks = vec![Block::Callout(CalloutBlock {
            rich_text: vec![run("Plain")],
            icon: None,
        })];

        assert_eq!(convert(&blocks), "> Plain");
    }

    #[test]
    fn test_unsupported_blocks_are_dropped() {
        let blocks = vec![
            Block::Paragraph(text("before")),
            Block::Unsupported("table".to_string()),
            Block::Paragraph(text("after")),
        ];

        assert_eq!(convert(&blocks), "before\n\nafter");
    }

    #[test]
    fn test_lists_quote_and_divider() {
        let blocks = vec![
            Block::BulletedListItem(text("one")),
            Block::NumberedListItem(text("two")),
            Block::Quote(text("quoted")),
            Block::Divider,
        ];

        assert_eq!(convert(&blocks), "- one\n\n1. two\n\n> quoted\n\n---");
    }

    #[test]
    fn test_code_block() {
        let blocks = vec![Block::Code(CodeBlock {
            rich_text: vec![RichText {
                plain_text: "fn main() {}".to_string(),
                annotations: Annotations {
                    bold: true,
                    ..Default::default()
                },
                ..Default::default()
            }],
            language: Some("rust".to_string()),
        })];

        assert_eq!(convert(&blocks), "```rust\nfn main() {}\n```");
    }

    #[test]
    fn test_code_block_without_language() {
        let blocks = vec![Block::Code(CodeBlock {
            rich_text: vec![run("ls -la")],
            language: None,
        })];

        assert_eq!(convert(&blocks), "```\nls -la\n```");
    }

    #[test]
    fn test_image_caption_and_fallback_alt() {
        let captioned = Block::Image(ImageBlock {
            caption: vec![run("Diagram")],
            external: Some(FileUrl {
                url: "https://img.example.com/d.png".to_string(),
            }),
            file: None,
        });
        let bare = Block::Image(ImageBlock {
            caption: vec![],
            external: None,
            file: Some(FileUrl {
                url: "https://files.example.com/x.png".to_string(),
            }),
        });

        assert_eq!(
            convert(&[captioned, bare]),
            "![Diagram](https://img.example.com/d.png)\n\n![image](https://files.example.com/x.png)"
        );
    }

    #[test]
    fn test_rich_text_annotation_nesting() {
        let runs = vec![
            RichText {
                plain_text: "all".to_string(),
                href: Some("https://example.com".to_string()),
                annotations: Annotations {
                    bold: true,
                    italic: true,
                    code: true,
                    strikethrough: true,
                    underline: false,
                },
            },
            run(" plain"),
        ];

        assert_eq!(
            rich_text_to_markdown(&runs),
            "[~~`***all***`~~](https://example.com) plain"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(&[]), "");
    }
}
