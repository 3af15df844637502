use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses a frontmatter date into a comparable timestamp.
///
/// Accepts RFC 3339 timestamps (`2024-03-01T10:00:00+02:00`), naive
/// date-times (`2024-03-01T10:00:00`, `2024-03-01 10:00:00`) and plain dates
/// (`2024-03-01`, taken as midnight UTC). Returns `None` for anything else.
pub fn parse_content_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
