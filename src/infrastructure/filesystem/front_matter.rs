//! `---`-delimited YAML front matter.

use serde::de::DeserializeOwned;

use crate::error::{ContentError, ContentResult};

const DELIMITER: &str = "---";

/// Splits a document into its YAML header and body.
///
/// The document must open with a `---` line; the header runs until the next
/// line consisting of `---`. Blank lines between the header and the body are
/// dropped.
pub fn split(source: &str) -> ContentResult<(&str, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let rest = source
        .strip_prefix(DELIMITER)
        .and_then(|rest| rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")))
        .ok_or_else(|| ContentError::front_matter("document does not start with '---'"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let header = &rest[..offset];
            let body = rest[offset + line.len()..].trim_start_matches(['\n', '\r']);
            return Ok((header, body));
        }
        offset += line.len();
    }

    Err(ContentError::front_matter("missing closing '---'"))
}

/// Parses the header into `F` and returns it with the body.
pub fn parse<F: DeserializeOwned>(source: &str) -> ContentResult<(F, String)> {
    let (header, body) = split(source)?;
    let frontmatter = serde_yaml::from_str(header)?;
    Ok((frontmatter, body.to_string()))
}
