//! Ordering and selection policy shared by the content services.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

/// Stable sort, newest first. Items whose date does not parse go last.
pub(crate) fn sort_newest_first<T>(items: &mut [T], date_of: impl Fn(&T) -> Option<DateTime<Utc>>) {
    items.sort_by_key(|item| std::cmp::Reverse(date_of(item)));
}

/// Union of all tags, deduplicated and sorted ascending.
pub(crate) fn collect_tags<'a, I>(tag_lists: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    tag_lists
        .into_iter()
        .flatten()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// First featured item in order; else the first item; `None` when empty.
pub(crate) fn pick_featured<T>(items: Vec<T>, is_featured: impl Fn(&T) -> bool) -> Option<T> {
    let index = items.iter().position(&is_featured).unwrap_or(0);
    items.into_iter().nth(index)
}
