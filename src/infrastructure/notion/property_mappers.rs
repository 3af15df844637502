//! Mapping of Notion page properties to frontmatter.
//!
//! Properties are looked up by their exact name in the data source schema.
//! Missing or mistyped properties never fail a mapping: every extractor
//! falls back to an empty value.

use serde_json::Value;

use super::types::PropertyMap;
use crate::domain::content::{
    AnyFrontmatter, ContentKind, PostFrontmatter, ProjectFrontmatter, ProjectStatus,
    TalkFrontmatter,
};

const TITLE_PROPERTIES: [&str; 3] = ["Title", "title", "Name"];
const SLUG_PROPERTIES: [&str; 2] = ["Slug", "slug"];

/// Maps a page's properties to the frontmatter shape of `kind`.
pub fn map_properties(kind: ContentKind, properties: &PropertyMap) -> AnyFrontmatter {
    match kind {
        ContentKind::Posts => AnyFrontmatter::Post(map_post(properties)),
        ContentKind::Projects => AnyFrontmatter::Project(map_project(properties)),
        ContentKind::Talks => AnyFrontmatter::Talk(map_talk(properties)),
    }
}

/// Returns the page slug, or `None` when no non-empty slug property exists.
pub fn extract_slug(properties: &PropertyMap) -> Option<String> {
    SLUG_PROPERTIES
        .iter()
        .find_map(|name| properties.get(*name))
        .and_then(|property| first_fragment(property, "rich_text"))
        .filter(|slug| !slug.is_empty())
}

pub fn map_post(properties: &PropertyMap) -> PostFrontmatter {
    PostFrontmatter {
        title: title(properties),
        excerpt: rich_text(properties, "Excerpt"),
        date: date(properties, "Date").unwrap_or_default(),
        reading_time: rich_text(properties, "Reading Time"),
        tags: multi_select(properties, "Tags"),
        featured: checkbox(properties, "Featured"),
        seo_title: optional_rich_text(properties, "SEO Title"),
        seo_description: optional_rich_text(properties, "SEO Description"),
        focus_keyword: optional_rich_text(properties, "Focus Keyword"),
    }
}

pub fn map_project(properties: &PropertyMap) -> ProjectFrontmatter {
    ProjectFrontmatter {
        title: title(properties),
        description: rich_text(properties, "Description"),
        tags: multi_select(properties, "Tags"),
        repo_url: url(properties, "Repo URL").unwrap_or_default(),
        status: ProjectStatus::from_select(select(properties, "Status")),
        hero_image: url(properties, "Hero Image"),
        demo_url: url(properties, "Demo URL"),
        featured: checkbox(properties, "Featured"),
        stars: number(properties, "Stars"),
        forks: number(properties, "Forks"),
        last_commit: date(properties, "Last Commit"),
        license: optional_rich_text(properties, "License"),
        seo_title: optional_rich_text(properties, "SEO Title"),
        seo_description: optional_rich_text(properties, "SEO Description"),
    }
}

pub fn map_talk(properties: &PropertyMap) -> TalkFrontmatter {
    TalkFrontmatter {
        title: title(properties),
        event: rich_text(properties, "Event"),
        date: date(properties, "Date").unwrap_or_default(),
        location: rich_text(properties, "Location"),
        tags: multi_select(properties, "Tags"),
        slides_url: url(properties, "Slides URL"),
        video_url: url(properties, "Video URL"),
        featured: checkbox(properties, "Featured"),
        description: optional_rich_text(properties, "Description"),
        seo_title: optional_rich_text(properties, "SEO Title"),
        seo_description: optional_rich_text(properties, "SEO Description"),
    }
}

fn first_fragment(property: &Value, field: &str) -> Option<String> {
    property
        .get(field)?
        .as_array()?
        .first()?
        .get("plain_text")?
        .as_str()
        .map(str::to_string)
}

fn title(properties: &PropertyMap) -> String {
    TITLE_PROPERTIES
        .iter()
        .find_map(|name| properties.get(*name))
        .and_then(|property| first_fragment(property, "title"))
        .unwrap_or_default()
}

fn rich_text(properties: &PropertyMap, name: &str) -> String {
    properties
        .get(name)
        .and_then(|property| first_fragment(property, "rich_text"))
        .unwrap_or_default()
}

fn optional_rich_text(properties: &PropertyMap, name: &str) -> Option<String> {
    Some(rich_text(properties, name)).filter(|text| !text.is_empty())
}

fn multi_select(properties: &PropertyMap, name: &str) -> Vec<String> {
    properties
        .get(name)
        .and_then(|property| property.get("multi_select"))
        .and_then(Value::as_array)
        .map(|options| {
            options
                .iter()
                .filter_map(|option| option.get("name")?.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Only a checked box is meaningful: unchecked and missing both map to `None`.
fn checkbox(properties: &PropertyMap, name: &str) -> Option<bool> {
    let checked = properties.get(name)?.get("checkbox")?.as_bool()?;
    checked.then_some(true)
}

fn date(properties: &PropertyMap, name: &str) -> Option<String> {
    properties
        .get(name)?
        .get("date")?
        .get("start")?
        .as_str()
        .map(str::to_string)
}

fn url(properties: &PropertyMap, name: &str) -> Option<String> {
    properties
        .get(name)?
        .get("url")?
        .as_str()
        .map(str::to_string)
}

fn number(properties: &PropertyMap, name: &str) -> Option<u32> {
    let value = properties.get(name)?.get("number")?;
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|n| *n >= 0.0).map(|n| n as u64))
        .and_then(|n| u32::try_from(n).ok())
}

fn select<'a>(properties: &'a PropertyMap, name: &str) -> Option<&'a str> {
    properties.get(name)?.get("select")?.get("name")?.as_str()
}
