#![allow(dead_code)]

use std::path::Path;

use serde_json::{Value, json};
use tempfile::TempDir;

/// Creates a content root with empty `posts`, `projects` and `talks` directories.
pub fn content_root() -> TempDir {
    let root = TempDir::new().unwrap();
    for kind in ["posts", "projects", "talks"] {
        std::fs::create_dir(root.path().join(kind)).unwrap();
    }
    root
}

pub fn write_file(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

pub fn post_mdx(title: &str, date: &str, extra: &str, body: &str) -> String {
    format!("---\ntitle: {title}\nexcerpt: About {title}\ndate: {date}\n{extra}---\n\n{body}")
}

pub fn project_mdx(title: &str, status: &str, extra: &str) -> String {
    format!(
        "---\ntitle: {title}\ndescription: {title} description\n\
         repoUrl: https://github.com/example/{title}\nstatus: {status}\n\
         {extra}---\n\nAbout {title}."
    )
}

pub fn talk_mdx(title: &str, date: &str, extra: &str) -> String {
    format!("---\ntitle: {title}\nevent: RustConf\ndate: {date}\nlocation: Online\n{extra}---\n")
}

// ── Notion payloads ─────────────────────────────────────────────────────────

pub fn rich_text(text: &str) -> Value {
    json!({
        "type": "rich_text",
        "rich_text": [{
            "type": "text",
            "text": {"content": text, "link": null},
            "plain_text": text,
            "href": null,
            "annotations": {
                "bold": false, "italic": false, "strikethrough": false,
                "underline": false, "code": false, "color": "default"
            }
        }]
    })
}

pub fn title(text: &str) -> Value {
    json!({"type": "title", "title": [{"type": "text", "plain_text": text, "href": null}]})
}

pub fn post_page(id: &str, slug: Option<&str>, name: &str, date: &str) -> Value {
    let mut properties = json!({
        "Title": title(name),
        "Status": {"type": "select", "select": {"name": "Published"}},
        "Excerpt": rich_text(&format!("About {name}")),
        "Date": {"type": "date", "date": {"start": date, "end": null}},
        "Tags": {"type": "multi_select", "multi_select": [{"name": "rust"}]},
        "Featured": {"type": "checkbox", "checkbox": false}
    });
    if let Some(slug) = slug {
        properties["Slug"] = rich_text(slug);
    }

    json!({"object": "page", "id": id, "properties": properties})
}

pub fn project_page(id: &str, slug: &str, name: &str) -> Value {
    json!({
        "object": "page",
        "id": id,
        "properties": {
            "Name": title(name),
            "Slug": rich_text(slug),
            "Status": {"type": "select", "select": {"name": "Published"}},
            "Description": rich_text("A project"),
            "Repo URL": {"type": "url", "url": format!("https://github.com/example/{slug}")},
            "Stars": {"type": "number", "number": 7}
        }
    })
}

pub fn list(results: Vec<Value>, next_cursor: Option<&str>) -> Value {
    json!({
        "object": "list",
        "results": results,
        "has_more": next_cursor.is_some(),
        "next_cursor": next_cursor
    })
}

pub fn paragraph(text: &str) -> Value {
    json!({
        "object": "block",
        "type": "paragraph",
        "paragraph": {"rich_text": rich_text(text)["rich_text"].clone()}
    })
}

pub fn heading(level: u8, text: &str) -> Value {
    let kind = format!("heading_{level}");
    let mut block = json!({"object": "block", "type": &kind});
    block[kind.as_str()] = json!({"rich_text": rich_text(text)["rich_text"].clone()});
    block
}
