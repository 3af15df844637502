//! Notion API payloads used by the content backend.
//!
//! Only the fields the backend reads are modeled. Page properties stay a
//! loosely typed JSON map and are interpreted by the property mappers.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Property bag of a Notion page, keyed by property name.
pub type PropertyMap = serde_json::Map<String, Value>;

/// A page returned by a data source query.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: PropertyMap,
}

/// One page of a cursor-paginated list response.
#[derive(Debug, Deserialize)]
pub struct PaginatedList<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Formatting flags of a rich text run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
}

/// A fragment of text with its own annotations and optional link.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RichText {
    pub plain_text: String,
    pub href: Option<String>,
    pub annotations: Annotations,
}

/// Payload shared by paragraphs, headings, list items and quotes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextBlock {
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CodeBlock {
    pub rich_text: Vec<RichText>,
    /// Notion sends `null` for blocks created without a language.
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Icon {
    Emoji { emoji: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalloutBlock {
    pub rich_text: Vec<RichText>,
    pub icon: Option<Icon>,
}

impl CalloutBlock {
    pub fn emoji(&self) -> Option<&str> {
        match &self.icon {
            Some(Icon::Emoji { emoji }) => Some(emoji),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileUrl {
    pub url: String,
}

/// Image hosted externally or uploaded to Notion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageBlock {
    pub caption: Vec<RichText>,
    pub external: Option<FileUrl>,
    pub file: Option<FileUrl>,
}

impl ImageBlock {
    pub fn url(&self) -> Option<&str> {
        self.external
            .as_ref()
            .or(self.file.as_ref())
            .map(|f| f.url.as_str())
    }
}

/// A content block, discriminated by its Notion `type`.
///
/// Kinds the Markdown converter does not handle are kept as
/// [`Block::Unsupported`] with their type name.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(TextBlock),
    Heading { level: u8, text: TextBlock },
    BulletedListItem(TextBlock),
    NumberedListItem(TextBlock),
    Code(CodeBlock),
    Quote(TextBlock),
    Callout(CalloutBlock),
    Image(ImageBlock),
    Divider,
    Unsupported(String),
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| D::Error::missing_field("type"))?
            .to_string();
        let payload = value.get_mut(&kind).map(Value::take).unwrap_or(Value::Null);

        let block = match kind.as_str() {
            "paragraph" => Block::Paragraph(payload_of(payload)?),
            "heading_1" => Block::Heading {
                level: 1,
                text: payload_of(payload)?,
            },
            "heading_2" => Block::Heading {
                level: 2,
                text: payload_of(payload)?,
            },
            "heading_3" => Block::Heading {
                level: 3,
                text: payload_of(payload)?,
            },
            "bulleted_list_item" => Block::BulletedListItem(payload_of(payload)?),
            "numbered_list_item" => Block::NumberedListItem(payload_of(payload)?),
            "code" => Block::Code(payload_of(payload)?),
            "quote" => Block::Quote(payload_of(payload)?),
            "callout" => Block::Callout(payload_of(payload)?),
            "image" => Block::Image(payload_of(payload)?),
            "divider" => Block::Divider,
            _ => Block::Unsupported(kind),
        };

        Ok(block)
    }
}

fn payload_of<T, E>(payload: Value) -> Result<T, E>
where
    T: DeserializeOwned + Default,
    E: serde::de::Error,
{
    if payload.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(payload).map_err(E::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_heading() {
        let block: Block = serde_json::from_value(json!({
            "object": "block",
            "id": "b1",
            "type": "heading_2",
            "heading_2": {
                "rich_text": [{
                    "type": "text",
                    "plain_text": "Setup",
                    "href": null,
                    "annotations": {
                        "bold": false,
                        "italic": false,
                        "strikethrough": false,
                        "underline": false,
                        "code": false,
                        "color": "default"
                    }
                }],
                "is_toggleable": false
            },
            "has_children": false
        }))
        .unwrap();

        match block {
            Block::Heading { level, text } => {
                assert_eq!(level, 2);
                assert_eq!(text.rich_text[0].plain_text, "Setup");
            }
            other => panic!("unexpected block: {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_unsupported() {
        let block: Block = serde_json::from_value(json!({
            "type": "table_of_contents",
            "table_of_contents": {"color": "default"}
        }))
        .unwrap();
        assert_eq!(block, Block::Unsupported("table_of_contents".to_string()));
    }

    #[test]
    fn test_deserialize_image_variants() {
        let external: Block = serde_json::from_value(json!({
            "type": "image",
            "image": {
                "type": "external",
                "external": {"url": "https://img.example.com/a.png"},
                "caption": []
            }
        }))
        .unwrap();
        let uploaded: Block = serde_json::from_value(json!({
            "type": "image",
            "image": {
                "type": "file",
                "file": {
                    "url": "https://s3.example.com/b.png",
                    "expiry_time": "2024-01-01T00:00:00.000Z"
                }
            }
        }))
        .unwrap();

        let Block::Image(external) = external else {
            panic!("expected image");
        };
        let Block::Image(uploaded) = uploaded else {
            panic!("expected image");
        };
        assert_eq!(external.url(), Some("https://img.example.com/a.png"));
        assert_eq!(uploaded.url(), Some("https://s3.example.com/b.png"));
    }

    #[test]
    fn test_callout_icon() {
        let block: Block = serde_json::from_value(json!({
            "type": "callout",
            "callout": {
                "rich_text": [],
                "icon": {"type": "external", "external": {"url": "https://x"}}
            }
        }))
        .unwrap();
        let Block::Callout(callout) = block else {
            panic!("expected callout");
        };
        assert_eq!(callout.emoji(), None);
    }

    #[test]
    fn test_deserialize_code_without_language() {
        let block: Block = serde_json::from_value(json!({
            "type": "code",
            "code": {
                "rich_text": [{"plain_text": "make build"}],
                "language": null
            }
        }))
        .unwrap();
        let Block::Code(code) = block else {
            panic!("expected code");
        };
        assert_eq!(code.language, None);
        assert_eq!(code.rich_text[0].plain_text, "make build");
    }

    #[test]
    fn test_deserialize_missing_type() {
        let result: Result<Block, _> = serde_json::from_value(json!({"paragraph": {}}));
        assert!(result.is_err());
    }
}
